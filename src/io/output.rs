// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{MeasureError, Result};
use crate::estimators::histogram::HistogramReport;
use crate::estimators::mutual_information::LagScan;

/// Where results are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Resolve the `-o` flag.
    ///
    /// No flag writes to stdout. A bare flag writes next to the input as
    /// `<datafile>.<extension>` (`stdin.<extension>` when reading stdin); a flag
    /// with a value writes to that path.
    pub fn resolve(flag: Option<Option<PathBuf>>, infile: Option<&Path>, extension: &str) -> Self {
        match flag {
            None => Self::Stdout,
            Some(Some(path)) => Self::File(path),
            Some(None) => {
                let base = match infile {
                    Some(p) if p != Path::new("-") => p.as_os_str().to_owned(),
                    _ => "stdin".into(),
                };
                let mut name = base;
                name.push(".");
                name.push(extension);
                Self::File(PathBuf::from(name))
            }
        }
    }

    /// Open the target for buffered writing.
    pub fn open(&self) -> Result<Box<dyn Write>> {
        match self {
            Self::Stdout => {
                info!("Writing to stdout");
                Ok(Box::new(BufWriter::new(io::stdout().lock())))
            }
            Self::File(path) => {
                let file = File::create(path).map_err(|e| {
                    MeasureError::data(format!("cannot open {} for writing: {e}", path.display()))
                })?;
                info!("Opened {} for writing", path.display());
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }
}

/// Write three `#` header lines followed by `<center> <value>` per bin.
pub fn write_histogram<W: Write + ?Sized>(out: &mut W, report: &HistogramReport) -> Result<()> {
    writeln!(out, "#interval of data: [{:.6e}:{:.6e}]", report.min, report.max)?;
    writeln!(out, "#average= {:.6e}", report.mean)?;
    writeln!(out, "#standard deviation= {:.6e}", report.std_dev)?;
    for record in &report.records {
        writeln!(out, "{:.6e} {:.6e}", record.center, record.value)?;
    }
    out.flush()?;
    Ok(())
}

/// Write `<lag> <raw> <normalized>` per scanned lag, no header.
pub fn write_lag_scan<W: Write + ?Sized>(out: &mut W, scan: &LagScan) -> Result<()> {
    for record in &scan.records {
        writeln!(out, "{} {:.6e} {:.6e}", record.lag, record.raw, record.normalized)?;
    }
    out.flush()?;
    Ok(())
}
