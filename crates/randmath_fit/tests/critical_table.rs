//! Checks of the default table against published critical values.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use randmath_core::types::MathError;
use randmath_fit::chi_squared::{
    chi_square_upper_tail, ChiSquaredError, ChiSquaredTable, ChiSquaredTableConfig,
};

/// Every row is non-increasing as the percentile rises.
#[test]
fn test_rows_are_monotone() {
    let table = ChiSquaredTable::new();
    for df in 1..=table.max_degrees_of_freedom() {
        let row = table.row(df).unwrap();
        assert!(
            row.windows(2).all(|pair| pair[0] >= pair[1]),
            "df {}: {:?}",
            df,
            row
        );
    }
}

/// Columns grow with the degrees of freedom.
#[test]
fn test_columns_increase_with_degrees_of_freedom() {
    let table = ChiSquaredTable::new();
    for &p in table.percentiles() {
        let mut previous = 0.0;
        for df in 1..=30 {
            let value = table.get_chi_squared(df, p).unwrap();
            assert!(value > previous, "p {} df {}", p, df);
            previous = value;
        }
    }
}

#[test]
fn test_published_values() {
    let table = ChiSquaredTable::new();
    let cases = [
        (1, 0.05, 3.841),
        (1, 0.01, 6.635),
        (2, 0.5, 1.386),
        (5, 0.95, 1.145),
        (10, 0.75, 6.737),
        (10, 0.7, 7.267),
        (10, 0.05, 18.307),
        (10, 0.005, 25.188),
        (10, 0.995, 2.156),
        (20, 0.5, 19.337),
        (30, 0.05, 43.773),
        (30, 0.995, 13.787),
    ];
    for (df, p, expected) in cases {
        assert_abs_diff_eq!(table.get_chi_squared(df, p).unwrap(), expected, epsilon = 2e-3);
    }
}

/// The smallest one-degree entries are accurate in relative terms.
#[test]
fn test_small_one_degree_entries() {
    let table = ChiSquaredTable::new();
    assert_relative_eq!(table.get_chi_squared(1, 0.995).unwrap(), 0.0000393, max_relative = 0.03);
    assert_relative_eq!(table.get_chi_squared(1, 0.99).unwrap(), 0.000157, max_relative = 0.03);
    assert_relative_eq!(table.get_chi_squared(1, 0.975).unwrap(), 0.000982, max_relative = 0.03);
}

/// Each entry maps back to its percentile through the upper tail.
#[test]
fn test_entries_invert_upper_tail() {
    let table = ChiSquaredTable::new();
    for df in 1..=30 {
        for (&p, &value) in table.percentiles().iter().zip(table.row(df).unwrap()) {
            assert_abs_diff_eq!(chi_square_upper_tail(value, df), p, epsilon = 1e-4);
        }
    }
}

#[test]
fn test_lookup_errors_convert_to_math_error() {
    let table = ChiSquaredTable::new();

    let err: MathError = table.get_chi_squared(31, 0.5).unwrap_err().into();
    assert!(matches!(err, MathError::NotFound(_)));

    let err = table.get_chi_squared(3, 0.123).unwrap_err();
    assert_eq!(err, ChiSquaredError::PercentileNotTabulated { percentile: 0.123 });
}

/// A table loaded from TOML agrees with the default on shared entries.
#[test]
fn test_toml_table_matches_default() {
    let config = ChiSquaredTableConfig::from_toml_str(
        r#"
        max_degrees_of_freedom = 12
        percentiles = [0.9, 0.5, 0.1]
        "#,
    )
    .unwrap();
    let custom = config.build().unwrap();
    let default = ChiSquaredTable::new();

    assert_eq!(custom.percentiles(), &[0.1, 0.5, 0.9]);
    for df in 1..=12 {
        for &p in custom.percentiles() {
            assert_eq!(
                custom.get_chi_squared(df, p).unwrap(),
                default.get_chi_squared(df, p).unwrap()
            );
        }
    }
    assert!(custom.get_chi_squared(13, 0.5).is_err());
}
