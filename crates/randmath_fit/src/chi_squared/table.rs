//! Chi-squared critical value table.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use std::time::Instant;

use tracing::{debug, trace, warn};

use super::config::{ChiSquaredTableConfig, DEFAULT_MAX_DEGREES_OF_FREEDOM, DEFAULT_PERCENTILES};
use super::distribution::critical_chi_square;
use super::error::ChiSquaredError;

/// Immutable table of chi-squared critical values.
///
/// Row `df` (for `1..=max_degrees_of_freedom`) holds one critical value per
/// percentile, with percentiles sorted ascending. Within a row the critical
/// values therefore never increase from left to right.
///
/// Construction computes every entry up front; there is no partially built
/// state and the table is `Send + Sync`.
///
/// # Examples
///
/// ```rust
/// use randmath_fit::chi_squared::ChiSquaredTable;
///
/// let table = ChiSquaredTable::new();
///
/// let critical = table.get_chi_squared(10, 0.05).unwrap();
/// assert!((critical - 18.307).abs() < 1e-3);
///
/// // A statistic of 7.1458 with 10 degrees of freedom sits at the 75th percentile
/// assert_eq!(table.get_percentage(10, 7.1458), 0.75);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ChiSquaredTable {
    max_degrees_of_freedom: u32,
    percentiles: Vec<f64>,
    /// Row-major, `percentiles.len()` entries per row.
    values: Vec<f64>,
}

impl Default for ChiSquaredTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ChiSquaredTable {
    /// Builds the default table: degrees of freedom 1 to 30 against the
    /// 24 classic percentiles.
    pub fn new() -> Self {
        let mut percentiles = DEFAULT_PERCENTILES.to_vec();
        percentiles.sort_by(f64::total_cmp);
        Self::compute(DEFAULT_MAX_DEGREES_OF_FREEDOM, percentiles)
    }

    /// Builds a table from a configuration.
    ///
    /// # Errors
    ///
    /// Returns `ChiSquaredError::InvalidConfig` if the configuration fails
    /// validation.
    pub fn build(config: &ChiSquaredTableConfig) -> Result<Self, ChiSquaredError> {
        config.validate()?;
        let mut percentiles = config.percentiles.clone();
        percentiles.sort_by(f64::total_cmp);
        Ok(Self::compute(config.max_degrees_of_freedom, percentiles))
    }

    fn compute(max_degrees_of_freedom: u32, percentiles: Vec<f64>) -> Self {
        let start = Instant::now();
        let mut values = Vec::with_capacity(max_degrees_of_freedom as usize * percentiles.len());

        for df in 1..=max_degrees_of_freedom {
            let row_start = values.len();
            values.extend(percentiles.iter().map(|&p| critical_chi_square(p, df)));
            trace!(df, row = ?&values[row_start..], "computed chi-squared row");
        }

        debug!(
            max_df = max_degrees_of_freedom,
            columns = percentiles.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "built chi-squared table"
        );

        Self {
            max_degrees_of_freedom,
            percentiles,
            values,
        }
    }

    /// Largest tabulated degrees of freedom.
    #[inline]
    pub fn max_degrees_of_freedom(&self) -> u32 {
        self.max_degrees_of_freedom
    }

    /// Tabulated percentiles, ascending.
    #[inline]
    pub fn percentiles(&self) -> &[f64] {
        &self.percentiles
    }

    /// Critical values for `df`, aligned with [`percentiles`](Self::percentiles).
    ///
    /// Returns `None` outside `1..=max_degrees_of_freedom`.
    pub fn row(&self, df: u32) -> Option<&[f64]> {
        if df == 0 || df > self.max_degrees_of_freedom {
            return None;
        }
        let width = self.percentiles.len();
        let start = (df as usize - 1) * width;
        Some(&self.values[start..start + width])
    }

    /// Critical value for an exact `(df, percentile)` entry.
    ///
    /// No interpolation is performed: `percentile` must be one of
    /// [`percentiles`](Self::percentiles).
    ///
    /// # Errors
    ///
    /// - `ChiSquaredError::DegreesOfFreedomNotTabulated` for `df == 0` or
    ///   `df > max_degrees_of_freedom`
    /// - `ChiSquaredError::PercentileNotTabulated` for any other percentile
    pub fn get_chi_squared(&self, df: u32, percentile: f64) -> Result<f64, ChiSquaredError> {
        let row = self
            .row(df)
            .ok_or(ChiSquaredError::DegreesOfFreedomNotTabulated {
                df,
                max: self.max_degrees_of_freedom,
            })?;
        let column = self
            .percentiles
            .iter()
            .position(|&p| p == percentile)
            .ok_or(ChiSquaredError::PercentileNotTabulated { percentile })?;
        Ok(row[column])
    }

    /// Percentile of the nearest tabulated threshold not above `value`.
    ///
    /// Scans the row for `df` and returns the smallest percentile whose
    /// critical value is `<= value`; when `value` is below every critical
    /// value the highest percentile is returned. `df` is clamped into
    /// `1..=max_degrees_of_freedom`.
    ///
    /// This is a table lookup, not a continuous inversion of the CDF.
    pub fn get_percentage(&self, df: u32, value: f64) -> f64 {
        let clamped = df.clamp(1, self.max_degrees_of_freedom);
        if clamped != df {
            warn!(
                df,
                clamped,
                max_df = self.max_degrees_of_freedom,
                "degrees of freedom outside table, clamping"
            );
        }

        let width = self.percentiles.len();
        let start = (clamped as usize - 1) * width;
        let row = &self.values[start..start + width];

        let index = row
            .iter()
            .position(|&critical| critical <= value)
            .unwrap_or(width - 1);
        self.percentiles[index]
    }

    /// Pearson's chi-squared statistic `Σ (e - o)² / e`.
    ///
    /// Expected counts are `round(p * sample_size)`. Only keys present in
    /// both maps contribute, summed in ascending key order so the result
    /// does not depend on hash iteration order.
    ///
    /// # Errors
    ///
    /// - `ChiSquaredError::InvalidSampleSize` if `sample_size == 0`
    /// - `ChiSquaredError::ZeroExpectedCount` if a shared key's expected
    ///   count rounds to zero
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use randmath_fit::chi_squared::ChiSquaredTable;
    ///
    /// let table = ChiSquaredTable::new();
    /// let expected = HashMap::from([("heads", 0.5), ("tails", 0.5)]);
    /// let observed = HashMap::from([("heads", 60_u64), ("tails", 40)]);
    ///
    /// let chi = table.calculate_chi_squared(&expected, &observed, 100).unwrap();
    /// assert!((chi - 4.0).abs() < 1e-12);
    /// ```
    pub fn calculate_chi_squared<K>(
        &self,
        expected_probabilities: &HashMap<K, f64>,
        observed_counts: &HashMap<K, u64>,
        sample_size: u64,
    ) -> Result<f64, ChiSquaredError>
    where
        K: Eq + Hash + Ord,
    {
        if sample_size == 0 {
            return Err(ChiSquaredError::InvalidSampleSize(sample_size));
        }

        let mut shared: Vec<(&K, f64, u64)> = expected_probabilities
            .iter()
            .filter_map(|(key, &p)| observed_counts.get(key).map(|&o| (key, p, o)))
            .collect();
        shared.sort_by(|a, b| a.0.cmp(b.0));

        let n = sample_size as f64;
        let mut sum = 0.0;
        for (_, probability, observed) in shared {
            let expected = (probability * n).round();
            if !(expected > 0.0) {
                return Err(ChiSquaredError::ZeroExpectedCount {
                    probability,
                    sample_size,
                });
            }
            let diff = expected - observed as f64;
            sum += diff * diff / expected;
        }
        Ok(sum)
    }

    /// Expected counts `round(p * sample_size)` per key, in key order.
    ///
    /// Negative or non-finite products map to 0.
    pub fn expected_counts<K>(
        &self,
        probabilities: &HashMap<K, f64>,
        sample_size: u64,
    ) -> BTreeMap<K, u64>
    where
        K: Ord + Clone,
    {
        let n = sample_size as f64;
        probabilities
            .iter()
            .map(|(key, &p)| (key.clone(), (p * n).round().max(0.0) as u64))
            .collect()
    }
}
