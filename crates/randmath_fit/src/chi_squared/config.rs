//! Chi-squared table configuration.
//!
//! This module provides configuration types and builders for
//! [`ChiSquaredTable`] construction.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::ChiSquaredError;
use super::table::ChiSquaredTable;

/// Default largest tabulated degrees of freedom.
pub const DEFAULT_MAX_DEGREES_OF_FREEDOM: u32 = 30;

/// Default percentile columns, matching the classic printed tables.
pub const DEFAULT_PERCENTILES: [f64; 24] = [
    0.995, 0.99, 0.975, 0.95, 0.90, 0.85, 0.8, 0.75, 0.7, 0.65, 0.6, 0.55, 0.5, 0.45, 0.4, 0.35,
    0.3, 0.25, 0.2, 0.10, 0.05, 0.025, 0.01, 0.005,
];

/// Chi-squared table configuration.
///
/// Rows run over degrees of freedom `1..=max_degrees_of_freedom`; columns are
/// upper-tail percentiles in the open interval (0, 1). Missing fields in a
/// TOML document fall back to the defaults.
///
/// # Examples
///
/// ```rust
/// use randmath_fit::chi_squared::ChiSquaredTableConfig;
///
/// let config = ChiSquaredTableConfig::from_toml_str(
///     r#"
///     max_degrees_of_freedom = 12
///     percentiles = [0.05, 0.5, 0.95]
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(config.max_degrees_of_freedom, 12);
/// let table = config.build().unwrap();
/// assert_eq!(table.percentiles(), &[0.05, 0.5, 0.95]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChiSquaredTableConfig {
    /// Largest tabulated degrees of freedom (at least 1).
    pub max_degrees_of_freedom: u32,
    /// Upper-tail percentiles, each in (0, 1), without duplicates.
    pub percentiles: Vec<f64>,
}

impl Default for ChiSquaredTableConfig {
    fn default() -> Self {
        Self {
            max_degrees_of_freedom: DEFAULT_MAX_DEGREES_OF_FREEDOM,
            percentiles: DEFAULT_PERCENTILES.to_vec(),
        }
    }
}

impl ChiSquaredTableConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> ChiSquaredTableConfigBuilder {
        ChiSquaredTableConfigBuilder::default()
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// - `ChiSquaredError::ConfigParse` for malformed TOML or unknown keys
    /// - `ChiSquaredError::InvalidConfig` if validation fails
    pub fn from_toml_str(source: &str) -> Result<Self, ChiSquaredError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        debug!(
            max_df = config.max_degrees_of_freedom,
            percentiles = config.percentiles.len(),
            "loaded chi-squared table configuration"
        );
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ChiSquaredError::InvalidConfig` if:
    /// - `max_degrees_of_freedom` is 0
    /// - `percentiles` is empty
    /// - a percentile is not finite or lies outside (0, 1)
    /// - a percentile appears twice
    pub fn validate(&self) -> Result<(), ChiSquaredError> {
        if self.max_degrees_of_freedom == 0 {
            return Err(ChiSquaredError::InvalidConfig(
                "max_degrees_of_freedom must be at least 1".to_string(),
            ));
        }
        if self.percentiles.is_empty() {
            return Err(ChiSquaredError::InvalidConfig(
                "percentiles must not be empty".to_string(),
            ));
        }
        if let Some(p) = self
            .percentiles
            .iter()
            .find(|p| !(p.is_finite() && **p > 0.0 && **p < 1.0))
        {
            return Err(ChiSquaredError::InvalidConfig(format!(
                "percentile {} is outside the open interval (0, 1)",
                p
            )));
        }

        let mut sorted = self.percentiles.clone();
        sorted.sort_by(f64::total_cmp);
        if let Some(pair) = sorted.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(ChiSquaredError::InvalidConfig(format!(
                "duplicate percentile {}",
                pair[0]
            )));
        }
        Ok(())
    }

    /// Builds the table described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns `ChiSquaredError::InvalidConfig` if validation fails.
    pub fn build(&self) -> Result<ChiSquaredTable, ChiSquaredError> {
        ChiSquaredTable::build(self)
    }
}

/// Builder for [`ChiSquaredTableConfig`].
///
/// Unset fields take the defaults; the result is validated at build time.
///
/// # Examples
///
/// ```rust
/// use randmath_fit::chi_squared::ChiSquaredTableConfig;
///
/// let config = ChiSquaredTableConfig::builder()
///     .max_degrees_of_freedom(5)
///     .percentiles(vec![0.9, 0.1])
///     .build()
///     .expect("valid config");
///
/// assert_eq!(config.max_degrees_of_freedom, 5);
///
/// assert!(ChiSquaredTableConfig::builder().percentiles(vec![]).build().is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ChiSquaredTableConfigBuilder {
    max_degrees_of_freedom: Option<u32>,
    percentiles: Option<Vec<f64>>,
}

impl ChiSquaredTableConfigBuilder {
    /// Sets the largest tabulated degrees of freedom.
    #[inline]
    pub fn max_degrees_of_freedom(mut self, max_df: u32) -> Self {
        self.max_degrees_of_freedom = Some(max_df);
        self
    }

    /// Sets the percentile columns.
    #[inline]
    pub fn percentiles(mut self, percentiles: Vec<f64>) -> Self {
        self.percentiles = Some(percentiles);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ChiSquaredError::InvalidConfig` if validation fails.
    pub fn build(self) -> Result<ChiSquaredTableConfig, ChiSquaredError> {
        let config = ChiSquaredTableConfig {
            max_degrees_of_freedom: self
                .max_degrees_of_freedom
                .unwrap_or(DEFAULT_MAX_DEGREES_OF_FREEDOM),
            percentiles: self
                .percentiles
                .unwrap_or_else(|| DEFAULT_PERCENTILES.to_vec()),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ChiSquaredTableConfig::default();
        assert_eq!(config.max_degrees_of_freedom, 30);
        assert_eq!(config.percentiles.len(), 24);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_defaults() {
        let config = ChiSquaredTableConfig::builder().build().unwrap();
        assert_eq!(config, ChiSquaredTableConfig::default());
    }

    #[test]
    fn test_validate_rejects_zero_degrees_of_freedom() {
        let err = ChiSquaredTableConfig::builder()
            .max_degrees_of_freedom(0)
            .build()
            .unwrap_err();
        assert!(matches!(err, ChiSquaredError::InvalidConfig(msg) if msg.contains("max_degrees_of_freedom")));
    }

    #[test]
    fn test_validate_rejects_out_of_range_percentiles() {
        for bad in [0.0, 1.0, -0.5, 1.5, f64::NAN, f64::INFINITY] {
            let result = ChiSquaredTableConfig::builder()
                .percentiles(vec![0.5, bad])
                .build();
            assert!(
                matches!(result, Err(ChiSquaredError::InvalidConfig(_))),
                "accepted {}",
                bad
            );
        }
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let err = ChiSquaredTableConfig::builder()
            .percentiles(vec![0.1, 0.5, 0.1])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ChiSquaredError::InvalidConfig("duplicate percentile 0.1".to_string())
        );
    }

    // ==========================================================
    // TOML loading
    // ==========================================================

    #[test]
    fn test_toml_partial_document_uses_defaults() {
        let config = ChiSquaredTableConfig::from_toml_str("max_degrees_of_freedom = 8").unwrap();
        assert_eq!(config.max_degrees_of_freedom, 8);
        assert_eq!(config.percentiles, DEFAULT_PERCENTILES.to_vec());

        let config = ChiSquaredTableConfig::from_toml_str("").unwrap();
        assert_eq!(config, ChiSquaredTableConfig::default());
    }

    #[test]
    fn test_toml_parse_errors() {
        let err = ChiSquaredTableConfig::from_toml_str("max_degrees_of_freedom = \"ten\"")
            .unwrap_err();
        assert!(matches!(err, ChiSquaredError::ConfigParse(_)));

        let err = ChiSquaredTableConfig::from_toml_str("rows = 4").unwrap_err();
        assert!(matches!(err, ChiSquaredError::ConfigParse(_)));
    }

    #[test]
    fn test_toml_validation_errors() {
        let err = ChiSquaredTableConfig::from_toml_str("percentiles = [0.5, 2.0]").unwrap_err();
        assert!(matches!(err, ChiSquaredError::InvalidConfig(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ChiSquaredTableConfig::builder()
            .max_degrees_of_freedom(4)
            .percentiles(vec![0.25, 0.75])
            .build()
            .unwrap();
        let text = toml::to_string(&config).unwrap();
        assert_eq!(ChiSquaredTableConfig::from_toml_str(&text).unwrap(), config);
    }
}
