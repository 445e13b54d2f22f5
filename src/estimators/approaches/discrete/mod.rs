// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Discrete estimators module: histogram counting over integer symbols and the
// statistics evaluated on those counts.

pub mod discrete_utils;
pub mod frequency;
pub mod lagged;

pub use discrete_utils::{JointHistogram, count_bins};
pub use frequency::BinFrequencies;
pub use lagged::{LaggedMutualInformation, cond_entropy};
