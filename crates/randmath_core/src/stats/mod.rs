//! Descriptive statistics.
//!
//! This module provides:
//! - `running`: Single-pass summary statistics
//! - `frequency`: Occurrence counting and ranking

pub mod frequency;
pub mod running;

pub use frequency::{FrequencyMap, FrequencyTuple};
pub use running::{RunningStats, SharedRunningStats};
