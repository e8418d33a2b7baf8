//! Integration tests for module exports.
//!
//! Verifies that all public modules and types are reachable via absolute
//! paths and through the module-level re-exports.

/// Special functions are accessible via absolute path and re-export.
#[test]
fn test_special_module_exports() {
    use randmath_core::math::special::{erf, erfc, expm1, norm_pdf, phi};
    use randmath_core::math::{gamma, log_factorial, log_gamma, normal_cdf_inverse};

    let _ = erf(0.3_f64);
    let _ = erfc(0.3_f64);
    let _ = phi(0.3_f64);
    let _ = norm_pdf(0.3_f64);
    let _ = expm1(0.3);
    let _ = log_factorial(12);
    assert!(gamma(3.0).is_ok());
    assert!(log_gamma(3.0).is_ok());
    assert!(normal_cdf_inverse(0.3).is_ok());
}

/// Statistics types are accessible via absolute path and re-export.
#[test]
fn test_stats_module_exports() {
    use randmath_core::stats::frequency::FrequencyTuple;
    use randmath_core::stats::running::SharedRunningStats;
    use randmath_core::stats::{FrequencyMap, RunningStats};

    let mut stats = RunningStats::new();
    stats.push(1.0);
    let shared = SharedRunningStats::new();
    shared.merge(&stats);
    assert_eq!(shared.snapshot().count(), 1);

    let mut map = FrequencyMap::new();
    map.add('x');
    assert_eq!(map.floor(1), vec![FrequencyTuple::new('x', 1)]);
}

/// Error types are accessible and convert through `?`.
#[test]
fn test_error_module_exports() {
    use randmath_core::types::error::ensure_positive;
    use randmath_core::types::{MathError, MathResult};

    fn check(scale: f64) -> MathResult<f64> {
        ensure_positive("scale", scale)?;
        Ok(scale)
    }

    assert_eq!(check(2.0), Ok(2.0));
    assert!(matches!(
        check(-2.0),
        Err(MathError::InvalidArgument { name: "scale", .. })
    ));
}

/// Running statistics and frequency counting working together, the way a
/// simulation summarises repeated experiments.
#[test]
fn test_stats_pipeline() {
    use randmath_core::stats::{FrequencyMap, RunningStats};

    let outcomes = [3_u32, 7, 7, 11, 7, 2, 3, 7];
    let freq: FrequencyMap<u32> = outcomes.iter().copied().collect();
    let stats: RunningStats = outcomes.iter().map(|&x| x as f64).collect();

    assert_eq!(freq.items_processed(), stats.count());
    assert_eq!(freq.floor_keys(2), vec!["7", "3"]);
    assert_eq!(stats.max(), Some(11.0));
}
