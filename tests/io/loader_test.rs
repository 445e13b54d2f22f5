// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::array;
use std::io::Cursor;

use lagmeasure::MeasureError;
use lagmeasure::config::{ColumnSelection, LoadOptions};
use lagmeasure::io::{load, load_path};

const TABLE: &str = "\
# header comment
1.0 10.0 100.0
2.0 20.0 200.0

3.0,30.0,300.0
4.0\t40.0\t400.0
5.0 50.0 500.0
";

fn options(skip: usize, length: Option<usize>, columns: ColumnSelection) -> LoadOptions {
    LoadOptions {
        skip,
        length,
        columns,
    }
}

#[test]
fn reads_first_column_by_default() {
    let data = load(Cursor::new(TABLE), &LoadOptions::default()).unwrap();
    assert_eq!(data.ncols(), 1);
    assert_eq!(data.column(0).to_owned(), array![1.0, 2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn selects_columns_in_requested_order() {
    let opts = options(0, None, ColumnSelection::Explicit(vec![3, 1]));
    let data = load(Cursor::new(TABLE), &opts).unwrap();
    assert_eq!(data.dim(), (5, 2));
    assert_eq!(data.row(2).to_owned(), array![300.0, 3.0]);
}

#[test]
fn skip_counts_raw_lines_and_length_truncates() {
    // skips the comment and the first record
    let opts = options(2, Some(2), ColumnSelection::Explicit(vec![2]));
    let data = load(Cursor::new(TABLE), &opts).unwrap();
    assert_eq!(data.column(0).to_owned(), array![20.0, 30.0]);
}

#[test]
fn leading_selection_adapts_to_the_first_record() {
    let opts = options(0, None, ColumnSelection::Leading(2));
    let wide = load(Cursor::new(TABLE), &opts).unwrap();
    assert_eq!(wide.ncols(), 2);

    let narrow = load(Cursor::new("1\n2\n3\n"), &opts).unwrap();
    assert_eq!(narrow.ncols(), 1);
    assert_eq!(narrow.nrows(), 3);
}

#[test]
fn non_numeric_lines_are_skipped() {
    let text = "1.0\nabc\n2.0\nnan\n3.0\n";
    let data = load(Cursor::new(text), &LoadOptions::default()).unwrap();
    assert_eq!(data.column(0).to_owned(), array![1.0, 2.0, 3.0]);
}

#[test]
fn short_source_is_a_data_error() {
    let opts = options(10, None, ColumnSelection::Explicit(vec![1]));
    assert!(matches!(
        load(Cursor::new("1\n2\n3\n"), &opts),
        Err(MeasureError::Data { .. })
    ));
}

#[test]
fn missing_column_is_a_data_error() {
    let opts = options(0, None, ColumnSelection::Explicit(vec![4]));
    assert!(matches!(
        load(Cursor::new(TABLE), &opts),
        Err(MeasureError::Data { .. })
    ));
}

#[test]
fn empty_source_is_a_data_error() {
    assert!(matches!(
        load(Cursor::new("# nothing\n\n"), &LoadOptions::default()),
        Err(MeasureError::Data { .. })
    ));
}

#[test]
fn invalid_options_are_rejected_before_reading() {
    let zero_column = options(0, None, ColumnSelection::Explicit(vec![0]));
    assert!(matches!(
        load(Cursor::new(TABLE), &zero_column),
        Err(MeasureError::Configuration { .. })
    ));
    let zero_length = options(0, Some(0), ColumnSelection::Explicit(vec![1]));
    assert!(matches!(
        load(Cursor::new(TABLE), &zero_length),
        Err(MeasureError::Configuration { .. })
    ));
}

#[test]
fn loads_from_a_file() {
    let path = std::env::temp_dir().join(format!("lagmeasure_loader_{}.dat", std::process::id()));
    std::fs::write(&path, TABLE).unwrap();
    let data = load_path(Some(&path), &LoadOptions::with_columns(vec![2])).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(data.column(0).to_owned(), array![10.0, 20.0, 30.0, 40.0, 50.0]);
}

#[test]
fn missing_file_is_a_data_error() {
    let path = std::env::temp_dir().join("lagmeasure_does_not_exist.dat");
    assert!(matches!(
        load_path(Some(&path), &LoadOptions::default()),
        Err(MeasureError::Data { .. })
    ));
}
