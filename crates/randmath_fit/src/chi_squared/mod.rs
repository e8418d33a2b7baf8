//! # Chi-Squared Goodness of Fit
//!
//! This module provides critical-value tables and Pearson's statistic for
//! testing observed categorical counts against expected probabilities.
//!
//! ## Module Structure
//!
//! - [`poz`], [`chi_square_upper_tail`], [`critical_chi_square`]: distribution routines
//! - [`ChiSquaredTableConfig`], [`ChiSquaredTableConfigBuilder`]: table layout, from code or TOML
//! - [`ChiSquaredTable`]: precomputed critical values and fit statistics
//! - [`ChiSquaredError`]: build and lookup failures
//!
//! ## Usage Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use randmath_fit::chi_squared::ChiSquaredTable;
//!
//! let table = ChiSquaredTable::new();
//! let expected = HashMap::from([(1, 0.5), (2, 0.5)]);
//! let observed = HashMap::from([(1, 52_u64), (2, 48)]);
//!
//! let chi = table.calculate_chi_squared(&expected, &observed, 100).unwrap();
//! let percentile = table.get_percentage(1, chi);
//! assert!(percentile >= 0.5);
//! ```

mod config;
mod distribution;
mod error;
mod table;

// Public re-exports
pub use config::{
    ChiSquaredTableConfig, ChiSquaredTableConfigBuilder, DEFAULT_MAX_DEGREES_OF_FREEDOM,
    DEFAULT_PERCENTILES,
};
pub use distribution::{chi_square_upper_tail, critical_chi_square, poz, CHI_MAX};
pub use error::ChiSquaredError;
pub use table::ChiSquaredTable;
