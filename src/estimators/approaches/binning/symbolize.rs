// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use crate::error::{MeasureError, Result};
use crate::estimators::traits::Symbolizer;

fn check_partitions(partitions: usize) -> Result<()> {
    if partitions == 0 {
        return Err(MeasureError::configuration(
            "number of partitions must be at least 1",
        ));
    }
    Ok(())
}

/// Binner for shifted series in `[0, range]`, used by the density histogram.
///
/// Values above `(1 - 1/(2P)) * range` are clamped down before scaling, so the
/// top half-bin folds into the last bin and `max` itself never produces index `P`.
#[derive(Debug, Clone, Copy)]
pub struct DensityBinner {
    partitions: usize,
    range: f64,
    ceiling: f64,
}

impl DensityBinner {
    pub fn new(partitions: usize, range: f64) -> Result<Self> {
        check_partitions(partitions)?;
        if !(range.is_finite() && range > 0.0) {
            return Err(MeasureError::configuration(format!(
                "binning range must be positive and finite, got {range}"
            )));
        }
        let width = 1.0 / partitions as f64;
        let ceiling = (1.0 - width / 2.0) * range;
        Ok(Self {
            partitions,
            range,
            ceiling,
        })
    }

    /// Width of one bin in the units of the shifted series.
    pub fn bin_width(&self) -> f64 {
        self.range / self.partitions as f64
    }
}

impl Symbolizer for DensityBinner {
    fn partitions(&self) -> usize {
        self.partitions
    }

    fn symbol(&self, value: f64) -> usize {
        let clamped = value.min(self.ceiling);
        // Float-to-int casts saturate: negatives and NaN map to 0.
        let idx = (clamped * self.partitions as f64 / self.range) as usize;
        idx.min(self.partitions - 1)
    }
}

/// Binner for unit-interval series, used by the lagged estimator.
///
/// `v < 1` maps to `floor(v * P)`; anything else (including the rescaled maximum
/// `1.0`) maps to `P - 1`.
#[derive(Debug, Clone, Copy)]
pub struct UnitBinner {
    partitions: usize,
}

impl UnitBinner {
    pub fn new(partitions: usize) -> Result<Self> {
        check_partitions(partitions)?;
        Ok(Self { partitions })
    }
}

impl Symbolizer for UnitBinner {
    fn partitions(&self) -> usize {
        self.partitions
    }

    fn symbol(&self, value: f64) -> usize {
        if value < 1.0 {
            ((value * self.partitions as f64) as usize).min(self.partitions - 1)
        } else {
            self.partitions - 1
        }
    }
}

/// Integer symbol sequence with every entry below `partitions`.
///
/// Built once per input column and shared read-only by every lag evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolSequence {
    symbols: Array1<usize>,
    partitions: usize,
}

impl SymbolSequence {
    /// Symbolize a series with any [`Symbolizer`].
    pub fn from_values<S: Symbolizer>(values: &Array1<f64>, symbolizer: &S) -> Self {
        Self {
            symbols: symbolizer.symbolize(values),
            partitions: symbolizer.partitions(),
        }
    }

    /// Wrap precomputed symbols, checking that all of them fit in `partitions` bins.
    pub fn from_symbols(symbols: Array1<usize>, partitions: usize) -> Result<Self> {
        check_partitions(partitions)?;
        if let Some(&bad) = symbols.iter().find(|&&s| s >= partitions) {
            return Err(MeasureError::data(format!(
                "symbol {bad} out of range for {partitions} partitions"
            )));
        }
        Ok(Self {
            symbols,
            partitions,
        })
    }

    pub fn symbols(&self) -> &Array1<usize> {
        &self.symbols
    }

    pub fn partitions(&self) -> usize {
        self.partitions
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
