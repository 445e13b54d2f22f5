// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Text input and output around the estimators.

pub mod loader;
pub mod output;

pub use loader::{load, load_path};
pub use output::{OutputTarget, write_histogram, write_lag_scan};
