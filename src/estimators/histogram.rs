// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use log::debug;
use ndarray::Array1;

use crate::config::HistogramConfig;
use crate::error::Result;
use crate::estimators::approaches::binning::{DensityBinner, shift_to_origin};
use crate::estimators::approaches::discrete::BinFrequencies;
use crate::estimators::utils::stats::variance;

/// One output line of the histogram: bin center and its frequency or density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramRecord {
    pub center: f64,
    pub value: f64,
}

/// Result of a histogram run: header metadata plus one record per bin.
#[derive(Debug, Clone)]
pub struct HistogramReport {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub density: bool,
    pub counts: Array1<u64>,
    pub records: Vec<HistogramRecord>,
}

impl HistogramReport {
    pub fn partitions(&self) -> usize {
        self.records.len()
    }
}

/// Single-series histogram estimator.
///
/// Shifts the series to start at zero, bins it into `P` equal-width bins over
/// `[min, max]` with the top half-bin folded into the last bin, and reports
/// relative frequencies or densities.
pub struct Histogram {
    config: HistogramConfig,
}

impl Histogram {
    pub fn new(config: HistogramConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &HistogramConfig {
        &self.config
    }

    /// Build the histogram of `data`.
    ///
    /// A constant series fails with a degenerate-input error before anything is counted.
    pub fn estimate(&self, data: &Array1<f64>) -> Result<HistogramReport> {
        let shifted = shift_to_origin(data)?;
        let (mean, std_dev) = variance(data)?;
        let binner = DensityBinner::new(self.config.partitions, shifted.range())?;
        debug!(
            "histogram of {} samples over [{}, {}] with {} bins (width {})",
            data.len(),
            shifted.extent.min,
            shifted.extent.max,
            self.config.partitions,
            binner.bin_width()
        );

        let frequencies = BinFrequencies::new(&shifted, &binner, self.config.density);
        let records = frequencies
            .centers()
            .iter()
            .zip(frequencies.values().iter())
            .map(|(&center, &value)| HistogramRecord { center, value })
            .collect();

        Ok(HistogramReport {
            min: shifted.extent.min,
            max: shifted.extent.max,
            mean,
            std_dev,
            density: self.config.density,
            counts: frequencies.counts().clone(),
            records,
        })
    }
}
