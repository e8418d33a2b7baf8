//! # randmath_fit: Chi-Squared Tables and Goodness of Fit
//!
//! ## Fitting Layer Role
//!
//! randmath_fit builds on randmath_core and provides:
//! - Chi-squared upper-tail probabilities and critical values
//! - `ChiSquaredTable`, a configurable grid of critical values
//! - Pearson's statistic over categorical counts
//!
//! Table layouts can be given in code, through a builder, or as TOML.
//! Errors convert into `randmath_core::types::MathError`.
//!
//! ## Usage Example
//!
//! ```rust
//! use randmath_fit::chi_squared::ChiSquaredTableConfig;
//!
//! let table = ChiSquaredTableConfig::builder()
//!     .max_degrees_of_freedom(10)
//!     .percentiles(vec![0.95, 0.5, 0.05])
//!     .build()
//!     .and_then(|config| config.build())
//!     .unwrap();
//!
//! let critical = table.get_chi_squared(10, 0.05).unwrap();
//! assert!((critical - 18.307).abs() < 1e-3);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod chi_squared;
