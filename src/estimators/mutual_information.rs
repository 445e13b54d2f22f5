// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Time-delayed mutual information
//!
//! Each input column is rescaled to the unit interval and mapped onto `P` symbols.
//! For every lag τ in `[-L, L]` a fresh `P x P` joint histogram pairs `a[j]` with
//! `b[j + |τ|]` over the `N - |τ|` valid indices, and the statistic
//!
//! ```text
//! I(τ) = Σ_ij p_ij ln(p_ij / (p_i p_j))
//! ```
//!
//! is evaluated together with its normalised form `I(τ) / ln(P)`. With a single
//! column both slots hold the same symbols and the scan yields the
//! self-information of the series against its own shifted copy.
//!
//! Lags are independent of each other; with the `parallel` feature they are
//! evaluated on the rayon thread pool and collected back in ascending order.

use log::{debug, warn};
use ndarray::{Array1, Array2};

use crate::config::MutualInformationConfig;
use crate::error::{MeasureError, Result};
use crate::estimators::approaches::binning::{SymbolSequence, UnitBinner, rescale_unit};
use crate::estimators::approaches::discrete::LaggedMutualInformation;
use crate::estimators::traits::{GlobalValue, NormalizedValue};
use crate::estimators::utils::lag_slicing::{clamp_max_lag, lag_range};

/// One output line of the scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LagRecord {
    pub lag: isize,
    pub raw: f64,
    pub normalized: f64,
}

/// All records of a scan in ascending lag order.
#[derive(Debug, Clone)]
pub struct LagScan {
    pub partitions: usize,
    /// Largest lag actually scanned, after clamping to `N - 1`.
    pub max_lag: usize,
    /// Statistic at lag zero.
    pub zero_lag: LagRecord,
    pub records: Vec<LagRecord>,
}

impl LagScan {
    pub fn get(&self, lag: isize) -> Option<&LagRecord> {
        let offset = lag.checked_add(self.max_lag as isize)?;
        usize::try_from(offset)
            .ok()
            .and_then(|idx| self.records.get(idx))
            .filter(|r| r.lag == lag)
    }

    pub fn raw_values(&self) -> Array1<f64> {
        self.records.iter().map(|r| r.raw).collect()
    }
}

/// Evaluate the statistic for one lag.
///
/// Pure function of the two symbol sequences and the lag.
pub fn lagged_statistic(a: &SymbolSequence, b: &SymbolSequence, lag: isize) -> Result<LagRecord> {
    let estimator = LaggedMutualInformation::new(a, b, lag)?;
    Ok(LagRecord {
        lag,
        raw: estimator.global_value(),
        normalized: estimator.normalized_value(),
    })
}

#[cfg(not(feature = "parallel"))]
fn evaluate_lags(a: &SymbolSequence, b: &SymbolSequence, max_lag: usize) -> Result<Vec<LagRecord>> {
    lag_range(max_lag)
        .map(|lag| lagged_statistic(a, b, lag))
        .collect()
}

#[cfg(feature = "parallel")]
fn evaluate_lags(a: &SymbolSequence, b: &SymbolSequence, max_lag: usize) -> Result<Vec<LagRecord>> {
    use rayon::prelude::*;

    let lags: Vec<isize> = lag_range(max_lag).collect();
    lags.par_iter()
        .map(|&lag| lagged_statistic(a, b, lag))
        .collect()
}

/// Lag-scan driver for one or two columns.
pub struct DelayedMutualInformation {
    config: MutualInformationConfig,
    binner: UnitBinner,
}

impl DelayedMutualInformation {
    pub fn new(config: MutualInformationConfig) -> Result<Self> {
        config.validate()?;
        let binner = UnitBinner::new(config.partitions)?;
        Ok(Self { config, binner })
    }

    pub fn config(&self) -> &MutualInformationConfig {
        &self.config
    }

    /// Rescale a column to the unit interval and map it onto symbols.
    pub fn symbolize(&self, column: &Array1<f64>) -> Result<SymbolSequence> {
        let rescaled = rescale_unit(column)?;
        Ok(SymbolSequence::from_values(&rescaled.values, &self.binner))
    }

    /// Scan a `samples x columns` array with one or two columns.
    pub fn scan(&self, data: &Array2<f64>) -> Result<LagScan> {
        match data.ncols() {
            1 => self.scan_series(&data.column(0).to_owned()),
            2 => self.scan_pair(&data.column(0).to_owned(), &data.column(1).to_owned()),
            n => Err(MeasureError::data(format!(
                "expected one or two columns, got {n}"
            ))),
        }
    }

    /// Scan a single series against itself.
    pub fn scan_series(&self, series: &Array1<f64>) -> Result<LagScan> {
        let symbols = self.symbolize(series)?;
        self.scan_symbols(&symbols, &symbols)
    }

    /// Scan `a` against `b`; both must have the same length.
    pub fn scan_pair(&self, a: &Array1<f64>, b: &Array1<f64>) -> Result<LagScan> {
        if a.len() != b.len() {
            return Err(MeasureError::data(format!(
                "columns differ in length: {} vs {}",
                a.len(),
                b.len()
            )));
        }
        let sa = self.symbolize(a)?;
        let sb = self.symbolize(b)?;
        self.scan_symbols(&sa, &sb)
    }

    /// Scan precomputed symbol sequences.
    pub fn scan_symbols(&self, a: &SymbolSequence, b: &SymbolSequence) -> Result<LagScan> {
        if a.partitions() != self.config.partitions || b.partitions() != self.config.partitions {
            return Err(MeasureError::configuration(format!(
                "symbols use {} and {} partitions, expected {}",
                a.partitions(),
                b.partitions(),
                self.config.partitions
            )));
        }
        if a.is_empty() {
            return Err(MeasureError::data("cannot scan an empty series"));
        }
        let zero_lag = lagged_statistic(a, b, 0)?;
        debug!(
            "zero-lag baseline over {} samples: {} ({} normalised)",
            a.len(),
            zero_lag.raw,
            zero_lag.normalized
        );

        let max_lag = clamp_max_lag(self.config.max_lag, a.len());
        if max_lag < self.config.max_lag {
            warn!(
                "maximal lag {} exceeds the series length {}, using {}",
                self.config.max_lag,
                a.len(),
                max_lag
            );
        }

        let records = evaluate_lags(a, b, max_lag)?;
        Ok(LagScan {
            partitions: self.config.partitions,
            max_lag,
            zero_lag,
            records,
        })
    }
}

/// Factory for mutual information estimators.
pub struct MutualInformation;

impl MutualInformation {
    /// Single-lag estimator over two symbol sequences.
    pub fn new_lagged(
        a: &SymbolSequence,
        b: &SymbolSequence,
        lag: isize,
    ) -> Result<LaggedMutualInformation> {
        LaggedMutualInformation::new(a, b, lag)
    }

    /// Lag-scan driver with the given configuration.
    pub fn new_delayed(config: MutualInformationConfig) -> Result<DelayedMutualInformation> {
        DelayedMutualInformation::new(config)
    }
}
