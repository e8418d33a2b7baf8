//! Error types for numerical operations.
//!
//! This module provides:
//! - `MathError`: The foundation error shared by every randmath layer
//! - `MathResult`: Result alias carrying a `MathError`

use thiserror::Error;

/// Result alias for fallible numerical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Numerical errors.
///
/// Higher layers define their own error enums and convert into this type
/// with `From`, so callers can handle every failure through a single enum.
///
/// # Variants
/// - `InvalidArgument`: A parameter outside its mathematical domain
/// - `NotFound`: A lookup outside a tabulated grid
///
/// # Examples
/// ```
/// use randmath_core::types::MathError;
///
/// let err = MathError::non_positive("shape", -1.0);
/// assert_eq!(format!("{}", err), "Invalid argument 'shape': must be positive, got -1");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MathError {
    /// Parameter outside its valid domain.
    #[error("Invalid argument '{name}': {message}")]
    InvalidArgument {
        /// Name of the offending parameter
        name: &'static str,
        /// Description of the violated constraint
        message: String,
    },

    /// Requested entry is not available.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl MathError {
    /// Builds an `InvalidArgument` for a value that must be strictly positive.
    pub fn non_positive(name: &'static str, value: f64) -> Self {
        MathError::InvalidArgument {
            name,
            message: format!("must be positive, got {}", value),
        }
    }

    /// Builds an `InvalidArgument` with a free-form message.
    pub fn invalid(name: &'static str, message: impl Into<String>) -> Self {
        MathError::InvalidArgument {
            name,
            message: message.into(),
        }
    }

    /// Returns `true` for `InvalidArgument`.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, MathError::InvalidArgument { .. })
    }
}

/// Rejects `value` unless it is strictly positive.
///
/// NaN is rejected as well, since it fails every comparison.
#[inline]
pub fn ensure_positive(name: &'static str, value: f64) -> MathResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(MathError::non_positive(name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_positive_display() {
        let err = MathError::non_positive("scale", 0.0);
        assert_eq!(
            format!("{}", err),
            "Invalid argument 'scale': must be positive, got 0"
        );
    }

    #[test]
    fn test_invalid_display() {
        let err = MathError::invalid("p", "must lie in (0, 1)");
        assert_eq!(format!("{}", err), "Invalid argument 'p': must lie in (0, 1)");
    }

    #[test]
    fn test_not_found_display() {
        let err = MathError::NotFound("df 31".to_string());
        assert_eq!(format!("{}", err), "Not found: df 31");
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn test_ensure_positive() {
        assert!(ensure_positive("x", 1e-300).is_ok());
        assert!(ensure_positive("x", 0.0).unwrap_err().is_invalid_argument());
        assert!(ensure_positive("x", -2.0).is_err());
        assert!(ensure_positive("x", f64::NAN).is_err());
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = MathError::non_positive("df", -3.0);
        let _: &dyn std::error::Error = &err;
    }
}
