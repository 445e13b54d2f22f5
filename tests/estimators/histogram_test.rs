// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use ndarray::array;
use rstest::rstest;

use lagmeasure::MeasureError;
use lagmeasure::config::HistogramConfig;
use lagmeasure::estimators::histogram::Histogram;

use crate::test_helpers::{generate_gaussian_series, generate_uniform_series};

fn histogram(partitions: usize, density: bool) -> Histogram {
    Histogram::new(HistogramConfig::new(partitions, density).unwrap()).unwrap()
}

#[test]
fn ramp_with_five_bins() {
    let data = array![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
    let report = histogram(5, false).estimate(&data).unwrap();

    assert_eq!(report.partitions(), 5);
    assert_eq!(report.counts, array![2u64, 2, 2, 2, 2]);
    assert_eq!(report.min, 0.0);
    assert_eq!(report.max, 9.0);
    assert_abs_diff_eq!(report.mean, 4.5, epsilon = 1e-12);
    assert_abs_diff_eq!(report.std_dev, 8.25f64.sqrt(), epsilon = 1e-12);

    let expected_centers = [0.9, 2.7, 4.5, 6.3, 8.1];
    for (record, &center) in report.records.iter().zip(expected_centers.iter()) {
        assert_abs_diff_eq!(record.center, center, epsilon = 1e-12);
        assert_abs_diff_eq!(record.value, 0.2, epsilon = 1e-12);
    }
}

#[test]
fn density_integrates_to_one() {
    let data = generate_gaussian_series(2000, 0.0, 1.0, 3);
    let report = histogram(30, true).estimate(&data).unwrap();
    assert!(report.density);
    let width = (report.max - report.min) / 30.0;
    let integral: f64 = report.records.iter().map(|r| r.value * width).sum();
    assert_abs_diff_eq!(integral, 1.0, epsilon = 1e-9);
}

#[rstest]
#[case(1)]
#[case(7)]
#[case(50)]
#[case(1000)]
fn relative_frequencies_sum_to_one(#[case] partitions: usize) {
    let data = generate_uniform_series(777, 42);
    let report = histogram(partitions, false).estimate(&data).unwrap();
    assert_eq!(report.records.len(), partitions);
    assert_eq!(report.counts.sum(), 777);
    let total: f64 = report.records.iter().map(|r| r.value).sum();
    assert_abs_diff_eq!(total, 1.0, epsilon = 1e-9);
}

#[test]
fn centers_are_evenly_spaced_inside_the_interval() {
    let data = generate_gaussian_series(500, 10.0, 3.0, 8);
    let report = histogram(20, false).estimate(&data).unwrap();
    let width = (report.max - report.min) / 20.0;
    for pair in report.records.windows(2) {
        assert_abs_diff_eq!(pair[1].center - pair[0].center, width, epsilon = 1e-9);
    }
    assert_abs_diff_eq!(report.records[0].center, report.min + width / 2.0, epsilon = 1e-9);
    assert!(report.records[19].center < report.max);
}

#[test]
fn single_bin_holds_everything() {
    let report = histogram(1, false).estimate(&array![1.0, 3.0, 2.0]).unwrap();
    assert_eq!(report.counts, array![3u64]);
    assert_abs_diff_eq!(report.records[0].value, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(report.records[0].center, 2.0, epsilon = 1e-12);
}

#[test]
fn constant_input_is_degenerate() {
    let err = histogram(5, false)
        .estimate(&array![5.0, 5.0, 5.0, 5.0])
        .unwrap_err();
    assert!(matches!(err, MeasureError::DegenerateInput { .. }));
}

#[test]
fn zero_partitions_are_rejected() {
    assert!(matches!(
        HistogramConfig::new(0, false),
        Err(MeasureError::Configuration { .. })
    ));
    let raw = HistogramConfig {
        partitions: 0,
        density: false,
    };
    assert!(matches!(
        Histogram::new(raw),
        Err(MeasureError::Configuration { .. })
    ));
}

#[test]
fn default_configuration() {
    let config = HistogramConfig::default();
    assert_eq!(config.partitions, 50);
    assert!(!config.density);
    assert_eq!(Histogram::new(config).unwrap().config(), &config);
}
