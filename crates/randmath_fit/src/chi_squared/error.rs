//! Error types for chi-squared tables.
//!
//! This module provides:
//! - `ChiSquaredError`: Errors raised while building or querying a table

use randmath_core::types::MathError;
use thiserror::Error;

/// Chi-squared table errors.
///
/// # Variants
/// - `DegreesOfFreedomNotTabulated`: Row outside `1..=max`
/// - `PercentileNotTabulated`: Column not in the configured grid
/// - `InvalidConfig`: Rejected table configuration
/// - `ConfigParse`: Malformed TOML configuration
/// - `InvalidSampleSize`: Zero sample size in a fit statistic
/// - `ZeroExpectedCount`: Expected count rounds to zero
///
/// # Examples
/// ```
/// use randmath_fit::chi_squared::ChiSquaredError;
///
/// let err = ChiSquaredError::DegreesOfFreedomNotTabulated { df: 31, max: 30 };
/// assert_eq!(format!("{}", err), "Degrees of freedom 31 not tabulated (table covers 1..=30)");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ChiSquaredError {
    /// Degrees of freedom outside the table.
    #[error("Degrees of freedom {df} not tabulated (table covers 1..={max})")]
    DegreesOfFreedomNotTabulated {
        /// Requested degrees of freedom
        df: u32,
        /// Largest tabulated degrees of freedom
        max: u32,
    },

    /// Percentile not among the configured columns.
    #[error("Percentile {percentile} not tabulated")]
    PercentileNotTabulated {
        /// Requested percentile
        percentile: f64,
    },

    /// Table configuration failed validation.
    #[error("Invalid table configuration: {0}")]
    InvalidConfig(String),

    /// Table configuration could not be parsed.
    #[error("Failed to parse table configuration: {0}")]
    ConfigParse(String),

    /// Sample size of zero.
    #[error("Invalid sample size {0}: must be at least 1")]
    InvalidSampleSize(u64),

    /// An expected count rounded to zero, so the statistic is undefined.
    #[error("Expected count is zero for probability {probability} with sample size {sample_size}")]
    ZeroExpectedCount {
        /// Probability of the offending category
        probability: f64,
        /// Sample size used for the expectation
        sample_size: u64,
    },
}

impl From<toml::de::Error> for ChiSquaredError {
    fn from(err: toml::de::Error) -> Self {
        ChiSquaredError::ConfigParse(err.to_string())
    }
}

impl From<ChiSquaredError> for MathError {
    fn from(err: ChiSquaredError) -> Self {
        match err {
            ChiSquaredError::DegreesOfFreedomNotTabulated { .. }
            | ChiSquaredError::PercentileNotTabulated { .. } => MathError::NotFound(err.to_string()),
            ChiSquaredError::InvalidConfig(_) | ChiSquaredError::ConfigParse(_) => {
                MathError::invalid("config", err.to_string())
            }
            ChiSquaredError::InvalidSampleSize(_) => {
                MathError::invalid("sample_size", err.to_string())
            }
            ChiSquaredError::ZeroExpectedCount { .. } => {
                MathError::invalid("expected_probabilities", err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================
    // Display tests
    // ==========================================================

    #[test]
    fn test_percentile_not_tabulated_display() {
        let err = ChiSquaredError::PercentileNotTabulated { percentile: 0.42 };
        assert_eq!(format!("{}", err), "Percentile 0.42 not tabulated");
    }

    #[test]
    fn test_invalid_sample_size_display() {
        let err = ChiSquaredError::InvalidSampleSize(0);
        assert_eq!(
            format!("{}", err),
            "Invalid sample size 0: must be at least 1"
        );
    }

    #[test]
    fn test_zero_expected_count_display() {
        let err = ChiSquaredError::ZeroExpectedCount {
            probability: 0.001,
            sample_size: 10,
        };
        assert!(err.to_string().contains("0.001"));
        assert!(err.to_string().contains("10"));
    }

    // ==========================================================
    // From<ChiSquaredError> for MathError tests
    // ==========================================================

    #[test]
    fn test_lookup_errors_map_to_not_found() {
        let err: MathError = ChiSquaredError::DegreesOfFreedomNotTabulated { df: 0, max: 30 }.into();
        assert!(matches!(err, MathError::NotFound(msg) if msg.contains("0")));

        let err: MathError = ChiSquaredError::PercentileNotTabulated { percentile: 0.3 }.into();
        assert!(matches!(err, MathError::NotFound(_)));
    }

    #[test]
    fn test_argument_errors_map_to_invalid_argument() {
        let cases = [
            ChiSquaredError::InvalidConfig("empty".to_string()),
            ChiSquaredError::ConfigParse("bad toml".to_string()),
            ChiSquaredError::InvalidSampleSize(0),
            ChiSquaredError::ZeroExpectedCount {
                probability: 0.0,
                sample_size: 5,
            },
        ];
        for err in cases {
            let math: MathError = err.into();
            assert!(math.is_invalid_argument());
        }
    }
}
