//! Streaming summary statistics.
//!
//! This module provides:
//! - `RunningStats`: Single-pass mean, variance and extrema (Welford)
//! - `SharedRunningStats`: Mutex-guarded accumulator for concurrent producers

use std::sync::{Mutex, MutexGuard, PoisonError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::error::{MathError, MathResult};

/// Single-pass summary statistics.
///
/// Observations are folded in one at a time using Welford's algorithm, so the
/// variance stays numerically stable without keeping the sample.
///
/// Alongside mean and variance the accumulator tracks the reciprocal sum
/// (harmonic mean), the log sum (geometric mean) and the extrema.
///
/// # Geometric Mean
/// The logarithm is only defined for positive values. Once a value `<= 0`
/// has been pushed, [`geometric_mean`](Self::geometric_mean) returns `0.0`
/// and [`checked_geometric_mean`](Self::checked_geometric_mean) returns an
/// error until the accumulator is cleared.
///
/// # Examples
/// ```
/// use randmath_core::stats::RunningStats;
///
/// let mut stats = RunningStats::new();
/// for x in [1.0, 2.0, 4.0] {
///     stats.push(x);
/// }
///
/// assert_eq!(stats.count(), 3);
/// assert!((stats.harmonic_mean() - 12.0 / 7.0).abs() < 1e-12);
/// assert_eq!(stats.min(), Some(1.0));
/// assert_eq!(stats.max(), Some(4.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunningStats {
    count: u64,
    mean: f64,
    sum_squared_deviations: f64,
    harmonic_denominator_sum: f64,
    log_sum: f64,
    non_positive_seen: bool,
    min: f64,
    max: f64,
}

impl Default for RunningStats {
    fn default() -> Self {
        Self::new()
    }
}

impl RunningStats {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            sum_squared_deviations: 0.0,
            harmonic_denominator_sum: 0.0,
            log_sum: 0.0,
            non_positive_seen: false,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Folds one observation into the statistics.
    pub fn push(&mut self, x: f64) {
        self.count += 1;

        if self.count == 1 {
            self.mean = x;
            self.sum_squared_deviations = 0.0;
        } else {
            let old_mean = self.mean;
            self.mean = old_mean + (x - old_mean) / self.count as f64;
            self.sum_squared_deviations += (x - old_mean) * (x - self.mean);
        }

        if x != 0.0 {
            self.harmonic_denominator_sum += 1.0 / x;
        }

        if x > 0.0 {
            self.log_sum += x.ln();
        } else {
            self.non_positive_seen = true;
        }

        self.min = self.min.min(x);
        self.max = self.max.max(x);
    }

    /// Combines another accumulator into this one.
    ///
    /// The result matches pushing every observation of `other` into `self`
    /// (Chan et al. pairwise update), up to floating point rounding.
    pub fn merge(&mut self, other: &RunningStats) {
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            *self = other.clone();
            return;
        }

        let na = self.count as f64;
        let nb = other.count as f64;
        let n = na + nb;
        let delta = other.mean - self.mean;

        self.mean += delta * (nb / n);
        self.sum_squared_deviations += other.sum_squared_deviations + delta * delta * na * nb / n;
        self.count += other.count;
        self.harmonic_denominator_sum += other.harmonic_denominator_sum;
        self.log_sum += other.log_sum;
        self.non_positive_seen |= other.non_positive_seen;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Resets every field to the empty state.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Number of observations pushed.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Arithmetic mean, or `0.0` when empty.
    #[inline]
    pub fn mean(&self) -> f64 {
        if self.count > 0 {
            self.mean
        } else {
            0.0
        }
    }

    /// Sample variance with Bessel's correction, or `0.0` for fewer than two
    /// observations.
    #[inline]
    pub fn variance(&self) -> f64 {
        if self.count > 1 {
            self.sum_squared_deviations / (self.count - 1) as f64
        } else {
            0.0
        }
    }

    /// Square root of [`variance`](Self::variance).
    #[inline]
    pub fn standard_deviation(&self) -> f64 {
        self.variance().sqrt()
    }

    /// `count / Σ(1/x)`, or `0.0` when the reciprocal sum is zero.
    ///
    /// Zero observations are counted but contribute nothing to the sum.
    pub fn harmonic_mean(&self) -> f64 {
        if self.harmonic_denominator_sum != 0.0 {
            self.count as f64 / self.harmonic_denominator_sum
        } else {
            0.0
        }
    }

    /// `exp(mean(ln x))`.
    ///
    /// Returns `0.0` when empty or when any observation was `<= 0`.
    pub fn geometric_mean(&self) -> f64 {
        self.checked_geometric_mean().unwrap_or(0.0)
    }

    /// Geometric mean, failing if a non-positive value was observed.
    ///
    /// # Errors
    /// `MathError::InvalidArgument` if any pushed value was `<= 0`.
    /// An empty accumulator yields `Ok(0.0)`.
    pub fn checked_geometric_mean(&self) -> MathResult<f64> {
        if self.non_positive_seen {
            return Err(MathError::invalid(
                "x",
                "geometric mean is undefined once a non-positive value was observed",
            ));
        }
        if self.count == 0 {
            return Ok(0.0);
        }
        Ok((self.log_sum / self.count as f64).exp())
    }

    /// Smallest observation, `None` when empty.
    #[inline]
    pub fn min(&self) -> Option<f64> {
        (self.count > 0).then_some(self.min)
    }

    /// Largest observation, `None` when empty.
    #[inline]
    pub fn max(&self) -> Option<f64> {
        (self.count > 0).then_some(self.max)
    }
}

impl Extend<f64> for RunningStats {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for x in iter {
            self.push(x);
        }
    }
}

impl FromIterator<f64> for RunningStats {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}

/// Thread-safe [`RunningStats`].
///
/// Every `push` takes the lock once. Readers take a [`snapshot`](Self::snapshot)
/// and query the copy, so no reader ever observes a half-applied update.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use std::thread;
/// use randmath_core::stats::SharedRunningStats;
///
/// let shared = Arc::new(SharedRunningStats::new());
/// let handles: Vec<_> = (0..4)
///     .map(|t| {
///         let shared = Arc::clone(&shared);
///         thread::spawn(move || {
///             for i in 0..100 {
///                 shared.push((t * 100 + i) as f64);
///             }
///         })
///     })
///     .collect();
/// for h in handles {
///     h.join().unwrap();
/// }
///
/// assert_eq!(shared.snapshot().count(), 400);
/// ```
#[derive(Debug, Default)]
pub struct SharedRunningStats {
    inner: Mutex<RunningStats>,
}

impl SharedRunningStats {
    /// Creates an empty shared accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, RunningStats> {
        // A panicking pusher cannot leave the accumulator half-updated
        // in a way later pushes would corrupt further, so keep going.
        self.inner.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("running stats lock poisoned, recovering");
            PoisonError::into_inner(poisoned)
        })
    }

    /// Folds one observation into the shared statistics.
    pub fn push(&self, x: f64) {
        self.lock().push(x);
    }

    /// Merges a locally accumulated batch under a single lock.
    pub fn merge(&self, other: &RunningStats) {
        self.lock().merge(other);
    }

    /// Copy of the current statistics.
    pub fn snapshot(&self) -> RunningStats {
        self.lock().clone()
    }

    /// Resets the shared statistics.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;
    use rayon::prelude::*;

    // ==========================================================
    // Basic accumulator tests
    // ==========================================================

    #[test]
    fn test_empty_accessors_are_safe() {
        let stats = RunningStats::new();
        assert_eq!(stats.count(), 0);
        assert_eq!(stats.mean(), 0.0);
        assert_eq!(stats.variance(), 0.0);
        assert_eq!(stats.standard_deviation(), 0.0);
        assert_eq!(stats.harmonic_mean(), 0.0);
        assert_eq!(stats.geometric_mean(), 0.0);
        assert_eq!(stats.min(), None);
        assert_eq!(stats.max(), None);
    }

    #[test]
    fn test_single_observation() {
        let mut stats = RunningStats::new();
        stats.push(3.5);
        assert_eq!(stats.mean(), 3.5);
        assert_eq!(stats.variance(), 0.0);
        assert_eq!(stats.min(), Some(3.5));
        assert_eq!(stats.max(), Some(3.5));
    }

    #[test]
    fn test_one_to_ninety_nine() {
        let stats: RunningStats = (1..100).map(|i| i as f64).collect();
        assert_eq!(stats.count(), 99);
        assert_relative_eq!(stats.mean(), 50.0, epsilon = 1e-12);
        assert_relative_eq!(stats.standard_deviation(), 28.722813232690143, epsilon = 1e-10);
        assert_eq!(stats.min(), Some(1.0));
        assert_eq!(stats.max(), Some(99.0));
    }

    #[test]
    fn test_harmonic_mean() {
        let stats: RunningStats = [1.0, 2.0, 4.0].into_iter().collect();
        assert_relative_eq!(stats.harmonic_mean(), 1.7142857142857142, epsilon = 1e-12);
    }

    #[test]
    fn test_geometric_mean() {
        let stats: RunningStats = [2.0, 8.0].into_iter().collect();
        assert_relative_eq!(stats.geometric_mean(), 4.0, epsilon = 1e-12);

        let stats: RunningStats = [1.0, 4.0, 1.0 / 32.0].into_iter().collect();
        assert_relative_eq!(stats.geometric_mean(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_geometric_mean_with_non_positive_value() {
        let stats: RunningStats = [2.0, 0.0, 8.0].into_iter().collect();
        assert_eq!(stats.geometric_mean(), 0.0);
        assert!(stats.checked_geometric_mean().unwrap_err().is_invalid_argument());

        let stats: RunningStats = [2.0, -8.0].into_iter().collect();
        assert_eq!(stats.geometric_mean(), 0.0);
        assert!(stats.checked_geometric_mean().is_err());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut stats: RunningStats = [-1.0, 5.0, 9.0].into_iter().collect();
        stats.clear();
        assert_eq!(stats, RunningStats::new());

        stats.push(2.0);
        stats.push(8.0);
        assert_relative_eq!(stats.geometric_mean(), 4.0, epsilon = 1e-12);
        assert_eq!(stats.min(), Some(2.0));
    }

    // ==========================================================
    // merge tests
    // ==========================================================

    #[test]
    fn test_merge_matches_sequential_push() {
        let all: Vec<f64> = (0..200).map(|i| (i as f64 * 0.37).sin() * 10.0 + 11.0).collect();
        let sequential: RunningStats = all.iter().copied().collect();

        let mut left: RunningStats = all[..73].iter().copied().collect();
        let right: RunningStats = all[73..].iter().copied().collect();
        left.merge(&right);

        assert_eq!(left.count(), sequential.count());
        assert_relative_eq!(left.mean(), sequential.mean(), epsilon = 1e-10);
        assert_relative_eq!(left.variance(), sequential.variance(), epsilon = 1e-9);
        assert_relative_eq!(left.harmonic_mean(), sequential.harmonic_mean(), epsilon = 1e-10);
        assert_relative_eq!(left.geometric_mean(), sequential.geometric_mean(), epsilon = 1e-10);
        assert_eq!(left.min(), sequential.min());
        assert_eq!(left.max(), sequential.max());
    }

    #[test]
    fn test_merge_with_empty() {
        let mut stats: RunningStats = [1.0, 2.0].into_iter().collect();
        let before = stats.clone();
        stats.merge(&RunningStats::new());
        assert_eq!(stats, before);

        let mut empty = RunningStats::new();
        empty.merge(&before);
        assert_eq!(empty, before);
    }

    // ==========================================================
    // SharedRunningStats tests
    // ==========================================================

    #[test]
    fn test_shared_concurrent_push() {
        let shared = SharedRunningStats::new();
        (1..=10_000).into_par_iter().for_each(|i| shared.push(i as f64));

        let snapshot = shared.snapshot();
        assert_eq!(snapshot.count(), 10_000);
        assert_abs_diff_eq!(snapshot.mean(), 5000.5, epsilon = 1e-8);
        assert_eq!(snapshot.min(), Some(1.0));
        assert_eq!(snapshot.max(), Some(10_000.0));
    }

    #[test]
    fn test_shared_merge_and_clear() {
        let shared = SharedRunningStats::new();
        let batch: RunningStats = [1.0, 2.0, 3.0].into_iter().collect();
        shared.merge(&batch);
        shared.push(4.0);
        assert_eq!(shared.snapshot().count(), 4);
        assert_relative_eq!(shared.snapshot().mean(), 2.5, epsilon = 1e-12);

        shared.clear();
        assert_eq!(shared.snapshot().count(), 0);
    }

    // ==========================================================
    // Property-based tests
    // ==========================================================

    proptest! {
        #[test]
        fn prop_min_mean_max_ordering(values in prop::collection::vec(-1e6f64..1e6, 1..100)) {
            let stats: RunningStats = values.iter().copied().collect();
            let min = stats.min().unwrap();
            let max = stats.max().unwrap();
            prop_assert!(min <= stats.mean() + 1e-6);
            prop_assert!(stats.mean() <= max + 1e-6);
            prop_assert!(stats.variance() >= 0.0);
        }

        #[test]
        fn prop_merge_is_split_invariant(
            values in prop::collection::vec(-1e3f64..1e3, 2..60),
            split in 0usize..60,
        ) {
            let split = split.min(values.len());
            let sequential: RunningStats = values.iter().copied().collect();
            let mut left: RunningStats = values[..split].iter().copied().collect();
            let right: RunningStats = values[split..].iter().copied().collect();
            left.merge(&right);

            prop_assert_eq!(left.count(), sequential.count());
            prop_assert!((left.mean() - sequential.mean()).abs() < 1e-8);
            prop_assert!((left.variance() - sequential.variance()).abs() < 1e-6 * (1.0 + sequential.variance()));
        }
    }
}
