// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use crate::error::{MeasureError, Result};

/// Mean and population standard deviation of a series.
pub fn variance(data: &Array1<f64>) -> Result<(f64, f64)> {
    let mean = data
        .mean()
        .ok_or_else(|| MeasureError::data("cannot compute the variance of an empty series"))?;
    Ok((mean, data.std(0.0)))
}
