// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use crate::error::{MeasureError, Result};

/// Smallest and largest sample of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Scan a series for its extent.
    ///
    /// Fails with a data error on empty input, non-finite samples or a spread
    /// `max - min` that overflows `f64`, and with [`MeasureError::DegenerateInput`]
    /// when all samples are equal.
    pub fn of(data: &Array1<f64>) -> Result<Self> {
        if data.is_empty() {
            return Err(MeasureError::data("cannot rescale an empty series"));
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in data.iter() {
            if !v.is_finite() {
                return Err(MeasureError::data(format!("non-finite sample {v}")));
            }
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
        }
        let range = max - min;
        if range == 0.0 {
            return Err(MeasureError::degenerate(min));
        }
        if !range.is_finite() {
            return Err(MeasureError::data(format!(
                "data range from {min:e} to {max:e} is not representable"
            )));
        }
        Ok(Self { min, max })
    }

    /// `max - min`, strictly positive and finite for an extent built by [`Extent::of`].
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Series shifted so that its minimum sits at zero; values lie in `[0, range]`.
#[derive(Debug, Clone)]
pub struct ShiftedSeries {
    pub values: Array1<f64>,
    pub extent: Extent,
}

impl ShiftedSeries {
    pub fn range(&self) -> f64 {
        self.extent.range()
    }
}

/// Series mapped onto the unit interval; values lie in `[0, 1]`.
#[derive(Debug, Clone)]
pub struct RescaledSeries {
    pub values: Array1<f64>,
    pub extent: Extent,
}

/// Subtract the minimum from every sample.
pub fn shift_to_origin(data: &Array1<f64>) -> Result<ShiftedSeries> {
    let extent = Extent::of(data)?;
    let values = data.mapv(|v| v - extent.min);
    Ok(ShiftedSeries { values, extent })
}

/// Map every sample to `(x - min) / (max - min)`.
///
/// The maximum lands exactly on `1.0`; the unit binner folds it into the last bin.
pub fn rescale_unit(data: &Array1<f64>) -> Result<RescaledSeries> {
    let extent = Extent::of(data)?;
    let interval = extent.range();
    let values = data.mapv(|v| (v - extent.min) / interval);
    Ok(RescaledSeries { values, extent })
}
