// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # lagmeasure
//!
//! Histogram-based estimators for scalar time series: a binned histogram of a
//! single series, and the time-delayed mutual information of one or two series
//! scanned over a symmetric range of lags.
//!
//! ## Quick Start
//!
//! ```rust
//! use lagmeasure::config::{HistogramConfig, MutualInformationConfig};
//! use lagmeasure::estimators::histogram::Histogram;
//! use lagmeasure::estimators::mutual_information::DelayedMutualInformation;
//! use ndarray::array;
//!
//! // Relative frequencies over five bins
//! let data = array![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
//! let report = Histogram::new(HistogramConfig::new(5, false).unwrap())
//!     .unwrap()
//!     .estimate(&data)
//!     .unwrap();
//! assert_eq!(report.counts.to_vec(), vec![2u64; 5]);
//!
//! // Self-information of a series at lags -3..=3
//! let scan = DelayedMutualInformation::new(MutualInformationConfig::new(4, 3).unwrap())
//!     .unwrap()
//!     .scan_series(&data)
//!     .unwrap();
//! assert_eq!(scan.records.len(), 7);
//! ```
//!
//! ## Pipeline
//!
//! 1. **Normalisation**: shift to `[0, max - min]` (histogram) or rescale to
//!    `[0, 1]` (lag scan). Constant series are rejected.
//! 2. **Symbolisation**: equal-width binning into `P` partitions with the upper
//!    edge folded into the last bin.
//! 3. **Counting**: dense 1D histograms, or `P x P` joint histograms with
//!    marginals rebuilt for every lag.
//! 4. **Evaluation**: relative frequencies / densities, or
//!    `Σ p_ij ln(p_ij / (p_i p_j))` and its `ln(P)`-normalised form.
//!
//! ## Feature Flags
//!
//! - `parallel`: evaluate the lags of a scan on the rayon thread pool.
//!
//! ## Binaries
//!
//! `histogram` and `mutual` wrap the estimators for whitespace-separated text files.

pub mod config;
pub mod error;
pub mod estimators;
pub mod io;
pub mod logging;

pub use error::{MeasureError, Result};
pub use estimators::traits::{GlobalValue, NormalizedValue, Symbolizer};
