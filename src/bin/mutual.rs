// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Estimates the time-delayed mutual information of one or two data columns.
//!
//! # Usage
//!
//! ```bash
//! # 16 boxes, lags -20..=20 of the first two columns (or column 1 against itself)
//! mutual data.dat
//!
//! # Columns 1 and 3, 8 boxes, lags -5..=5, written to data.dat.mut
//! mutual data.dat -c 1,3 -b 8 -D 5 -o
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use lagmeasure::config::{
    ColumnSelection, DEFAULT_MAX_LAG, DEFAULT_MI_PARTITIONS, LoadOptions, MutualInformationConfig,
    parse_columns,
};
use lagmeasure::estimators::mutual_information::DelayedMutualInformation;
use lagmeasure::io::{OutputTarget, load_path, write_lag_scan};
use lagmeasure::logging::init_logging;

/// Estimates the time delayed mutual information of one or two data columns
#[derive(Parser, Debug)]
#[command(name = "mutual")]
#[command(disable_version_flag = true)]
struct Args {
    /// Data file; none or `-` reads stdin
    datafile: Option<PathBuf>,

    /// Number of points to be used [default: all]
    #[arg(short = 'l')]
    length: Option<usize>,

    /// Number of lines to be ignored
    #[arg(short = 'x', default_value_t = 0)]
    exclude: usize,

    /// Columns to read, e.g. "1" or "1,3" [default: first two, or the only one]
    #[arg(short = 'c')]
    columns: Option<String>,

    /// Number of boxes
    #[arg(short = 'b', default_value_t = DEFAULT_MI_PARTITIONS)]
    partitions: usize,

    /// Maximal time delay
    #[arg(short = 'D', default_value_t = DEFAULT_MAX_LAG)]
    max_lag: usize,

    /// Output file; without a name writes to '<datafile>.mut'. No -o writes to stdout
    #[arg(short = 'o', num_args = 0..=1)]
    output: Option<Option<PathBuf>>,

    /// Verbosity level: 0 only errors, 1 adds input/output messages, 2 adds run details
    #[arg(short = 'V', default_value_t = 1)]
    verbosity: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbosity);

    let config = MutualInformationConfig::new(args.partitions, args.max_lag)?;
    let estimator = DelayedMutualInformation::new(config)?;
    let columns = match args.columns.as_deref() {
        Some(spec) => {
            let columns = parse_columns(spec)?;
            if columns.len() > 2 {
                anyhow::bail!("at most two columns can be used, got {}", columns.len());
            }
            ColumnSelection::Explicit(columns)
        }
        None => ColumnSelection::Leading(2),
    };
    let options = LoadOptions {
        skip: args.exclude,
        length: args.length,
        columns,
    };

    let data = load_path(args.datafile.as_deref(), &options).context("failed to load data")?;
    let scan = estimator
        .scan(&data)
        .context("failed to compute mutual information")?;

    let target = OutputTarget::resolve(args.output, args.datafile.as_deref(), "mut");
    let mut out = target.open()?;
    write_lag_scan(&mut out, &scan)?;
    Ok(())
}
