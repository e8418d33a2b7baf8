//! Mathematical functions.
//!
//! This module provides:
//! - `special`: Error function, normal CDF and its inverse, gamma family

pub mod special;

pub use special::{
    erf, erfc, expm1, gamma, log_factorial, log_gamma, norm_pdf, normal_cdf_inverse, phi,
};
