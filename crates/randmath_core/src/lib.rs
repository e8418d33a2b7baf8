//! # randmath_core: Numerical Foundation
//!
//! ## Foundation Layer Role
//!
//! randmath_core is the bottom layer of the workspace, providing:
//! - Special functions: `erf`, `phi`, `normal_cdf_inverse`, `gamma`,
//!   `log_gamma`, `log_factorial` (`math::special`)
//! - Streaming statistics: `RunningStats`, `SharedRunningStats` (`stats::running`)
//! - Frequency counting: `FrequencyMap`, `FrequencyTuple` (`stats::frequency`)
//! - Error types: `MathError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! This layer has no dependencies on other randmath_* crates, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error types
//! - tracing: Diagnostics
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use randmath_core::math::special::{erf, log_gamma};
//! use randmath_core::stats::RunningStats;
//!
//! let mut stats = RunningStats::new();
//! for x in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
//!     stats.push(x);
//! }
//! assert_eq!(stats.mean(), 5.0);
//!
//! assert!((erf(0.5_f64) - 0.5205).abs() < 1e-4);
//! assert!((log_gamma(12.0).unwrap() - 17.502307845873887).abs() < 1e-10);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `RunningStats` and `FrequencyTuple`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod math;
pub mod stats;
pub mod types;
