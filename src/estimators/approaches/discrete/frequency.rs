// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use crate::estimators::approaches::binning::{DensityBinner, ShiftedSeries, SymbolSequence};
use crate::estimators::approaches::discrete::discrete_utils::count_bins;

/// Equal-width histogram of a shifted series.
///
/// Counts are normalised either to relative frequencies `n_i / N` or to densities
/// `n_i / N * P / range`. Bin centers are reported in the units of the original
/// series: `(i + 0.5) * range / P + min`.
#[derive(Debug, Clone)]
pub struct BinFrequencies {
    counts: Array1<u64>,
    n: usize,
    min: f64,
    range: f64,
    density: bool,
}

impl BinFrequencies {
    pub fn new(series: &ShiftedSeries, binner: &DensityBinner, density: bool) -> Self {
        let symbols = SymbolSequence::from_values(&series.values, binner);
        let counts = count_bins(&symbols);
        Self {
            counts,
            n: symbols.len(),
            min: series.extent.min,
            range: series.range(),
            density,
        }
    }

    pub fn counts(&self) -> &Array1<u64> {
        &self.counts
    }

    pub fn partitions(&self) -> usize {
        self.counts.len()
    }

    /// Center of every bin.
    pub fn centers(&self) -> Array1<f64> {
        let width = self.range / self.partitions() as f64;
        Array1::from_shape_fn(self.partitions(), |i| (i as f64 + 0.5) * width + self.min)
    }

    /// Relative frequency or density of every bin.
    pub fn values(&self) -> Array1<f64> {
        let mut norm = 1.0 / self.n as f64;
        if self.density {
            norm *= self.partitions() as f64 / self.range;
        }
        self.counts.mapv(|c| c as f64 * norm)
    }
}
