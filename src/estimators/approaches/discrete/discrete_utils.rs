// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2, Zip};

use crate::error::{MeasureError, Result};
use crate::estimators::approaches::binning::SymbolSequence;
use crate::estimators::utils::lag_slicing::LagWindow;

/// Count the occurrences of each bin index in a dense vector of length `partitions`.
pub fn count_bins(symbols: &SymbolSequence) -> Array1<u64> {
    let mut dense = Array1::<u64>::zeros(symbols.partitions());
    for &s in symbols.symbols().iter() {
        dense[s] += 1;
    }
    dense
}

/// Joint `P x P` histogram of two symbol sequences at a fixed lag, with both marginals.
///
/// Axis 0 indexes the first sequence, axis 1 the second one read `|lag|` steps ahead.
#[derive(Debug, Clone)]
pub struct JointHistogram {
    pub joint: Array2<u64>,
    /// Counts of the first sequence over the overlap (axis-0 sums).
    pub marginal_a: Array1<u64>,
    /// Counts of the second sequence over the overlap (axis-1 sums).
    pub marginal_b: Array1<u64>,
    /// Number of pairs, `N - |lag|`.
    pub total: u64,
    pub lag: isize,
}

impl JointHistogram {
    /// Accumulate all pairs `(a[j], b[j + |lag|])` with both indices in bounds.
    ///
    /// Fails if the sequences disagree on length or partition count, or if
    /// `|lag| >= N` leaves nothing to pair.
    pub fn at_lag(a: &SymbolSequence, b: &SymbolSequence, lag: isize) -> Result<Self> {
        if a.partitions() != b.partitions() {
            return Err(MeasureError::configuration(format!(
                "partition counts differ: {} vs {}",
                a.partitions(),
                b.partitions()
            )));
        }
        if a.len() != b.len() {
            return Err(MeasureError::data(format!(
                "symbol sequences differ in length: {} vs {}",
                a.len(),
                b.len()
            )));
        }
        let window = LagWindow::new(a.len(), lag).ok_or_else(|| {
            MeasureError::configuration(format!(
                "lag {lag} leaves no overlap for {} samples",
                a.len()
            ))
        })?;

        let p = a.partitions();
        let mut joint = Array2::<u64>::zeros((p, p));
        let mut marginal_a = Array1::<u64>::zeros(p);
        let mut marginal_b = Array1::<u64>::zeros(p);

        let (head, tail) = window.slice(a.symbols().view(), b.symbols().view());
        Zip::from(&head).and(&tail).for_each(|&i, &j| {
            joint[[i, j]] += 1;
            marginal_a[i] += 1;
            marginal_b[j] += 1;
        });

        Ok(Self {
            joint,
            marginal_a,
            marginal_b,
            total: window.len as u64,
            lag,
        })
    }

    pub fn partitions(&self) -> usize {
        self.marginal_a.len()
    }
}
