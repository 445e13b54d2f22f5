// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::array;
use rstest::rstest;

use lagmeasure::MeasureError;
use lagmeasure::estimators::Symbolizer;
use lagmeasure::estimators::approaches::binning::{
    DensityBinner, SymbolSequence, UnitBinner, rescale_unit, shift_to_origin,
};

use crate::test_helpers::{generate_ar1_series, generate_gaussian_series, generate_uniform_series};

#[rstest]
#[case(1)]
#[case(2)]
#[case(5)]
#[case(16)]
#[case(50)]
#[case(257)]
fn unit_binner_stays_in_range(#[case] partitions: usize) {
    let binner = UnitBinner::new(partitions).unwrap();
    for series in [
        generate_uniform_series(500, 1),
        generate_gaussian_series(500, -4.0, 10.0, 2),
        generate_ar1_series(500, 0.9, 3),
    ] {
        let rescaled = rescale_unit(&series).unwrap();
        let symbols = binner.symbolize(&rescaled.values);
        assert!(symbols.iter().all(|&s| s < partitions));
    }
    for v in [-3.0, 0.0, 0.5, 0.999_999, 1.0, 2.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(binner.symbol(v) < partitions, "value {v} escaped the bins");
    }
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(5)]
#[case(16)]
#[case(50)]
#[case(257)]
fn density_binner_stays_in_range(#[case] partitions: usize) {
    for series in [
        generate_uniform_series(500, 4),
        generate_gaussian_series(500, 100.0, 0.01, 5),
        generate_ar1_series(500, 0.5, 6),
    ] {
        let shifted = shift_to_origin(&series).unwrap();
        let binner = DensityBinner::new(partitions, shifted.range()).unwrap();
        let symbols = binner.symbolize(&shifted.values);
        assert!(symbols.iter().all(|&s| s < partitions));
    }
    let binner = DensityBinner::new(partitions, 3.0).unwrap();
    for v in [-1.0, 0.0, 1.5, 3.0, 10.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(binner.symbol(v) < partitions, "value {v} escaped the bins");
    }
}

#[test]
fn unit_binner_edges() {
    let binner = UnitBinner::new(4).unwrap();
    assert_eq!(binner.symbol(0.0), 0);
    assert_eq!(binner.symbol(0.24), 0);
    assert_eq!(binner.symbol(0.25), 1);
    assert_eq!(binner.symbol(0.5), 2);
    assert_eq!(binner.symbol(0.99), 3);
    // the rescaled maximum folds into the last bin
    assert_eq!(binner.symbol(1.0), 3);
    assert_eq!(binner.symbol(1.5), 3);
}

#[test]
fn density_binner_folds_top_half_bin() {
    // range 9, 5 bins: width 1.8, ceiling 8.1
    let binner = DensityBinner::new(5, 9.0).unwrap();
    assert_eq!(binner.symbol(0.0), 0);
    assert_eq!(binner.symbol(1.7), 0);
    assert_eq!(binner.symbol(2.0), 1);
    assert_eq!(binner.symbol(5.0), 2);
    assert_eq!(binner.symbol(8.0), 4);
    assert_eq!(binner.symbol(9.0), 4);
    assert!((binner.bin_width() - 1.8).abs() < 1e-12);
}

#[test]
fn zero_partitions_are_rejected() {
    assert!(matches!(
        UnitBinner::new(0),
        Err(MeasureError::Configuration { .. })
    ));
    assert!(matches!(
        DensityBinner::new(0, 1.0),
        Err(MeasureError::Configuration { .. })
    ));
}

#[test]
fn density_binner_needs_positive_range() {
    assert!(DensityBinner::new(4, 0.0).is_err());
    assert!(DensityBinner::new(4, -1.0).is_err());
    assert!(DensityBinner::new(4, f64::NAN).is_err());
}

#[test]
fn symbol_sequence_checks_bounds() {
    let ok = SymbolSequence::from_symbols(array![0, 3, 1], 4).unwrap();
    assert_eq!(ok.len(), 3);
    assert_eq!(ok.partitions(), 4);

    assert!(matches!(
        SymbolSequence::from_symbols(array![0, 4], 4),
        Err(MeasureError::Data { .. })
    ));
    assert!(matches!(
        SymbolSequence::from_symbols(array![0], 0),
        Err(MeasureError::Configuration { .. })
    ));
}

#[test]
fn symbol_sequence_from_values_uses_binner() {
    let binner = UnitBinner::new(2).unwrap();
    let seq = SymbolSequence::from_values(&array![0.0, 0.4, 0.6, 1.0], &binner);
    assert_eq!(seq.symbols(), &array![0usize, 0, 1, 1]);
    assert_eq!(seq.partitions(), 2);
}
