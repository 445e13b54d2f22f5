// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

pub trait GlobalValue {
    /// Compute and return the global value of the measure.
    fn global_value(&self) -> f64;
}

/// Interface for measures with a known upper bound used for normalisation.
pub trait NormalizedValue: GlobalValue {
    /// Theoretical maximum of the measure, e.g. `ln(P)` for `P` symbols.
    fn normalization(&self) -> f64;

    /// Global value divided by [`normalization`](Self::normalization).
    ///
    /// A zero bound (a single partition) yields `0.0` rather than NaN.
    fn normalized_value(&self) -> f64 {
        let bound = self.normalization();
        if bound > 0.0 {
            self.global_value() / bound
        } else {
            0.0
        }
    }
}

/// Maps real values onto bin indices in `[0, partitions - 1]`.
///
/// Implementors must never return an index outside that range, whatever the input.
pub trait Symbolizer {
    /// Number of bins `P`.
    fn partitions(&self) -> usize;

    /// Bin index for a single value.
    fn symbol(&self, value: f64) -> usize;

    /// Bin indices for a whole series.
    fn symbolize(&self, values: &Array1<f64>) -> Array1<usize> {
        values.mapv(|v| self.symbol(v))
    }
}
