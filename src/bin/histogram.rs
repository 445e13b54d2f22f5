// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Creates a histogram of a one-dimensional dataset.
//!
//! # Usage
//!
//! ```bash
//! # 50 bins of column 1, relative frequencies to stdout
//! histogram data.dat
//!
//! # 20 bins of column 2 as densities, written to data.dat.his
//! histogram data.dat -c 2 -b 20 -D -o
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use lagmeasure::config::{
    ColumnSelection, DEFAULT_HISTOGRAM_PARTITIONS, HistogramConfig, LoadOptions,
};
use lagmeasure::estimators::histogram::Histogram;
use lagmeasure::io::{OutputTarget, load_path, write_histogram};
use lagmeasure::logging::init_logging;

/// Creates a histogram of a one-dimensional dataset
#[derive(Parser, Debug)]
#[command(name = "histogram")]
#[command(disable_version_flag = true)]
struct Args {
    /// Data file; none or `-` reads stdin
    datafile: Option<PathBuf>,

    /// Number of samples to use [default: whole file]
    #[arg(short = 'l')]
    length: Option<usize>,

    /// Number of lines to ignore
    #[arg(short = 'x', default_value_t = 0)]
    exclude: usize,

    /// Column to read
    #[arg(short = 'c', default_value_t = 1)]
    column: usize,

    /// Number of intervals
    #[arg(short = 'b', default_value_t = DEFAULT_HISTOGRAM_PARTITIONS)]
    partitions: usize,

    /// Output densities instead of relative frequencies
    #[arg(short = 'D')]
    density: bool,

    /// Output file; without a name writes to '<datafile>.his'. No -o writes to stdout
    #[arg(short = 'o', num_args = 0..=1)]
    output: Option<Option<PathBuf>>,

    /// Verbosity level: 0 only errors, 1 adds input/output messages, 2 adds run details
    #[arg(short = 'V', default_value_t = 1)]
    verbosity: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbosity);

    let config = HistogramConfig::new(args.partitions, args.density)?;
    let estimator = Histogram::new(config)?;
    let options = LoadOptions {
        skip: args.exclude,
        length: args.length,
        columns: ColumnSelection::Explicit(vec![args.column]),
    };

    let data = load_path(args.datafile.as_deref(), &options).context("failed to load data")?;
    let report = estimator
        .estimate(&data.column(0).to_owned())
        .context("failed to build histogram")?;

    let target = OutputTarget::resolve(args.output, args.datafile.as_deref(), "his");
    let mut out = target.open()?;
    write_histogram(&mut out, &report)?;
    Ok(())
}
