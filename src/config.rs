// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Immutable run configuration for the loader and both estimators.
//!
//! Every struct carries the documented defaults through `Default` and checks its
//! bounds in `validate`, so invalid settings are rejected before any data is read.

use crate::error::{MeasureError, Result};

/// Default number of bins of the single-series histogram.
pub const DEFAULT_HISTOGRAM_PARTITIONS: usize = 50;
/// Default number of bins per axis of the lagged estimator.
pub const DEFAULT_MI_PARTITIONS: usize = 16;
/// Default largest lag scanned by the lagged estimator.
pub const DEFAULT_MAX_LAG: usize = 20;

/// Which columns of a text source are read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelection {
    /// 1-based column numbers, in output order.
    Explicit(Vec<usize>),
    /// The first `k` columns, or fewer if the first record has fewer fields.
    Leading(usize),
}

impl ColumnSelection {
    /// Columns to read from a record with `fields` fields.
    pub fn resolve(&self, fields: usize) -> Vec<usize> {
        match self {
            Self::Explicit(columns) => columns.clone(),
            Self::Leading(k) => (1..=(*k).min(fields).max(1)).collect(),
        }
    }
}

/// How samples are read from a text source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Lines ignored at the start of the source.
    pub skip: usize,
    /// Maximum number of samples kept; `None` keeps all.
    pub length: Option<usize>,
    pub columns: ColumnSelection,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            skip: 0,
            length: None,
            columns: ColumnSelection::Explicit(vec![1]),
        }
    }
}

impl LoadOptions {
    pub fn with_columns(columns: Vec<usize>) -> Self {
        Self {
            columns: ColumnSelection::Explicit(columns),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        match &self.columns {
            ColumnSelection::Explicit(columns) => {
                if columns.is_empty() {
                    return Err(MeasureError::configuration("no columns selected"));
                }
                if columns.contains(&0) {
                    return Err(MeasureError::configuration("column numbers start at 1"));
                }
            }
            ColumnSelection::Leading(0) => {
                return Err(MeasureError::configuration("no columns selected"));
            }
            ColumnSelection::Leading(_) => {}
        }
        if self.length == Some(0) {
            return Err(MeasureError::configuration(
                "number of samples to use must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Parse a column list such as `"1,3"` or `"2"` into 1-based column numbers.
pub fn parse_columns(spec: &str) -> Result<Vec<usize>> {
    let columns = spec
        .split([',', ' '])
        .filter(|t| !t.is_empty())
        .map(|t| {
            t.parse::<usize>()
                .map_err(|_| MeasureError::configuration(format!("invalid column '{t}'")))
        })
        .collect::<Result<Vec<_>>>()?;
    LoadOptions::with_columns(columns.clone()).validate()?;
    Ok(columns)
}

/// Settings of the single-series histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramConfig {
    pub partitions: usize,
    /// Report densities instead of relative frequencies.
    pub density: bool,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            partitions: DEFAULT_HISTOGRAM_PARTITIONS,
            density: false,
        }
    }
}

impl HistogramConfig {
    pub fn new(partitions: usize, density: bool) -> Result<Self> {
        let config = Self {
            partitions,
            density,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.partitions == 0 {
            return Err(MeasureError::configuration(
                "number of partitions must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Settings of the time-delayed mutual information scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutualInformationConfig {
    pub partitions: usize,
    /// Lags `-max_lag..=max_lag` are scanned; clamped to `N - 1` at run time.
    pub max_lag: usize,
}

impl Default for MutualInformationConfig {
    fn default() -> Self {
        Self {
            partitions: DEFAULT_MI_PARTITIONS,
            max_lag: DEFAULT_MAX_LAG,
        }
    }
}

impl MutualInformationConfig {
    pub fn new(partitions: usize, max_lag: usize) -> Result<Self> {
        let config = Self {
            partitions,
            max_lag,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.partitions == 0 {
            return Err(MeasureError::configuration(
                "number of partitions must be at least 1",
            ));
        }
        if self.max_lag > isize::MAX as usize {
            return Err(MeasureError::configuration(format!(
                "maximal lag {} is too large",
                self.max_lag
            )));
        }
        Ok(())
    }
}
