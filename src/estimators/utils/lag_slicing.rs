// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{ArrayView1, s};
use std::ops::RangeInclusive;

/// Overlap of a series of length `n` with its copy shifted by `lag`.
///
/// Pairs are `(a[a_start + k], b[b_start + k])` for `k` in `0..len`. The sign of the
/// lag is flipped for negative lags, so the second series is always the one read
/// `|lag|` steps ahead: `a[j]` pairs with `b[j + |lag|]` for `j` in `0..n - |lag|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LagWindow {
    pub a_start: usize,
    pub b_start: usize,
    pub len: usize,
}

impl LagWindow {
    /// Window for `lag`, or `None` when `|lag| >= n` leaves no pairs.
    pub fn new(n: usize, lag: isize) -> Option<Self> {
        let shift = lag.unsigned_abs();
        if shift >= n {
            return None;
        }
        Some(Self {
            a_start: 0,
            b_start: shift,
            len: n - shift,
        })
    }

    /// Aligned views over both series; both have length `self.len`.
    pub fn slice<'a, T>(
        &self,
        a: ArrayView1<'a, T>,
        b: ArrayView1<'a, T>,
    ) -> (ArrayView1<'a, T>, ArrayView1<'a, T>) {
        (
            a.slice_move(s![self.a_start..self.a_start + self.len]),
            b.slice_move(s![self.b_start..self.b_start + self.len]),
        )
    }
}

/// Largest usable lag for a series of length `n`: `max_lag` clamped to `n - 1`.
pub fn clamp_max_lag(max_lag: usize, n: usize) -> usize {
    max_lag.min(n.saturating_sub(1))
}

/// All lags in `[-max_lag, max_lag]`, ascending.
pub fn lag_range(max_lag: usize) -> RangeInclusive<isize> {
    let l = max_lag as isize;
    -l..=l
}
