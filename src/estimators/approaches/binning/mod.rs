// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Binning: rescaling of real series and their mapping onto integer symbols.

pub mod normalize;
pub mod symbolize;

pub use normalize::{Extent, RescaledSeries, ShiftedSeries, rescale_unit, shift_to_origin};
pub use symbolize::{DensityBinner, SymbolSequence, UnitBinner};
