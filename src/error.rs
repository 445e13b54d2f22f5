// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error type shared by the estimators, the loader and the writers.

use thiserror::Error;

/// Errors raised before any output is produced.
///
/// Once a lag scan has started no error can occur: lags and partition counts
/// are validated up front.
#[derive(Debug, Error)]
pub enum MeasureError {
    /// Invalid partition count, lag or length bounds.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What was wrong with the configuration
        message: String,
    },

    /// Unreadable or malformed source, or too few samples.
    #[error("Data error: {message}")]
    Data {
        /// Description of the data problem
        message: String,
    },

    /// A series with zero range (all samples equal) cannot be binned.
    #[error("Degenerate input: data ranges from {min:e} to {max:e}")]
    DegenerateInput {
        /// Smallest sample
        min: f64,
        /// Largest sample
        max: f64,
    },

    /// Underlying read or write failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeasureError {
    /// Create a Configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a Data error.
    pub fn data(message: impl Into<String>) -> Self {
        Self::Data {
            message: message.into(),
        }
    }

    /// Create a DegenerateInput error for a constant series.
    pub fn degenerate(value: f64) -> Self {
        Self::DegenerateInput {
            min: value,
            max: value,
        }
    }
}

pub type Result<T> = std::result::Result<T, MeasureError>;
