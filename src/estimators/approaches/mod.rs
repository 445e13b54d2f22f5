// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod binning;
pub mod discrete;

// Unified re-exports so tests and users can import
// lagmeasure::estimators::approaches::* ergonomically.
pub use binning::{DensityBinner, SymbolSequence, UnitBinner};
pub use discrete::{BinFrequencies, JointHistogram, LaggedMutualInformation};
