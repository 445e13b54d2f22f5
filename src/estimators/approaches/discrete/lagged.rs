// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::Result;
use crate::estimators::approaches::binning::SymbolSequence;
use crate::estimators::approaches::discrete::discrete_utils::JointHistogram;
use crate::estimators::traits::{GlobalValue, NormalizedValue};

/// Histogram estimate of the dependence between a symbol sequence and a lagged one.
///
/// The global value is computed by [`cond_entropy`] from the joint histogram at a
/// single lag; the normalised value divides it by `ln(P)`.
pub struct LaggedMutualInformation {
    histogram: JointHistogram,
}

impl LaggedMutualInformation {
    pub fn new(a: &SymbolSequence, b: &SymbolSequence, lag: isize) -> Result<Self> {
        let histogram = JointHistogram::at_lag(a, b, lag)?;
        Ok(Self { histogram })
    }

    pub fn from_histogram(histogram: JointHistogram) -> Self {
        Self { histogram }
    }

    pub fn histogram(&self) -> &JointHistogram {
        &self.histogram
    }

    pub fn lag(&self) -> isize {
        self.histogram.lag
    }
}

impl GlobalValue for LaggedMutualInformation {
    fn global_value(&self) -> f64 {
        cond_entropy(&self.histogram)
    }
}

impl NormalizedValue for LaggedMutualInformation {
    fn normalization(&self) -> f64 {
        (self.histogram.partitions() as f64).ln()
    }
}

/// Lagged dependence statistic `Σ_ij p_ij ln(p_ij / (p_i p_j))` in nats.
///
/// Historically labelled a conditional entropy, the functional evaluated here is
/// the plug-in mutual information of the two marginals. The label is kept as is.
/// Cells with `p_ij = 0` and rows/columns with a zero marginal contribute nothing.
pub fn cond_entropy(histogram: &JointHistogram) -> f64 {
    if histogram.total == 0 {
        return 0.0;
    }
    let norm = 1.0 / histogram.total as f64;
    let mut value = 0.0_f64;
    for (i, &ci) in histogram.marginal_a.iter().enumerate() {
        let pi = ci as f64 * norm;
        if pi <= 0.0 {
            continue;
        }
        for (j, &cj) in histogram.marginal_b.iter().enumerate() {
            let pj = cj as f64 * norm;
            if pj <= 0.0 {
                continue;
            }
            let pij = histogram.joint[[i, j]] as f64 * norm;
            if pij > 0.0 {
                value += pij * (pij / pi / pj).ln();
            }
        }
    }
    value
}
