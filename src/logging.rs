// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use env_logger::Env;
use log::LevelFilter;

/// Map a numeric verbosity to a log level: 0 errors only, 1 adds I/O messages,
/// 2 and above adds per-run details.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Initialise `env_logger` on stderr. `RUST_LOG`, when set, overrides `verbosity`.
pub fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level_for_verbosity(verbosity));
    builder.parse_env(Env::default());
    builder.format_timestamp(None);
    builder.try_init().ok();
}
