//! Shared types for the randmath workspace.
//!
//! This module provides:
//! - `error`: The structured error taxonomy shared by every layer
//!
//! # Re-exports
//!
//! [`MathError`] and the [`MathResult`] alias are re-exported at this level.

pub mod error;

pub use error::{MathError, MathResult};
