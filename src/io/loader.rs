// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use log::{debug, info, warn};
use ndarray::Array2;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::config::{ColumnSelection, LoadOptions};
use crate::error::{MeasureError, Result};

/// Read selected columns of whitespace- or comma-separated numbers.
///
/// The first `options.skip` lines are dropped unread. Blank lines and lines
/// starting with `#` are ignored; a line with a non-numeric or non-finite value
/// in a selected column is skipped with a warning. A line with fewer fields
/// than the largest selected column is a data error. Reading stops once
/// `options.length` rows have been collected.
///
/// A [`ColumnSelection::Leading`] selection is resolved against the first record.
/// Returns a `samples x columns` array in the order of the selected columns.
pub fn load<R: BufRead>(reader: R, options: &LoadOptions) -> Result<Array2<f64>> {
    options.validate()?;
    let mut columns: Option<Vec<usize>> = None;
    let limit = options.length.unwrap_or(usize::MAX);
    let mut values: Vec<f64> = Vec::new();
    let mut rows = 0usize;
    let mut lines_seen = 0usize;

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        lines_seen += 1;
        if lineno < options.skip {
            continue;
        }
        if rows >= limit {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            debug!("line {} ignored", lineno + 1);
            continue;
        }
        let fields: Vec<&str> = trimmed
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();

        let selected = columns.get_or_insert_with(|| options.columns.resolve(fields.len()));
        let mut row = Vec::with_capacity(selected.len());
        for &col in selected.iter() {
            let field = fields.get(col - 1).ok_or_else(|| {
                MeasureError::data(format!(
                    "column {col} requested but line {} has only {} columns",
                    lineno + 1,
                    fields.len()
                ))
            })?;
            match field.parse::<f64>() {
                Ok(v) if v.is_finite() => row.push(v),
                _ => break,
            }
        }
        if row.len() != selected.len() {
            warn!("line {} ignored: not a numeric record", lineno + 1);
            continue;
        }
        values.extend(row);
        rows += 1;
    }

    if lines_seen < options.skip {
        return Err(MeasureError::data(format!(
            "source has {lines_seen} lines, fewer than the {} to skip",
            options.skip
        )));
    }
    let ncols = match columns {
        Some(c) if rows > 0 => c.len(),
        _ => return Err(MeasureError::data("no numeric data found")),
    };
    debug!("read {rows} samples of {ncols} column(s)");
    Array2::from_shape_vec((rows, ncols), values)
        .map_err(|e| MeasureError::data(format!("cannot shape data: {e}")))
}

/// Load from a file, or from stdin when `path` is `None` or `-`.
pub fn load_path(path: Option<&Path>, options: &LoadOptions) -> Result<Array2<f64>> {
    match path {
        Some(p) if p != Path::new("-") => {
            let file = File::open(p).map_err(|e| {
                MeasureError::data(format!("cannot open {}: {e}", p.display()))
            })?;
            info!("Using {} as datafile", p.display());
            load(BufReader::new(file), options)
        }
        _ => {
            info!("Reading data from stdin");
            load(io::stdin().lock(), options)
        }
    }
}
