//! # randmath_rng: Generator Backends and Distribution Sampling
//!
//! ## Sampling Layer Role
//!
//! randmath_rng sits directly on top of randmath_core and provides:
//! - Three native generator backends behind the `GeneratorBackend` capability
//! - `Generator`, a closed sum type over the backends with static dispatch
//! - `RandomNumberFactory`, which turns raw output into uniform, normal,
//!   gamma, beta, Weibull, Student-t and related variates
//!
//! Parameter validation errors are reported as `randmath_core::types::MathError`.
//!
//! ## Usage Example
//!
//! ```rust
//! use randmath_rng::rng::{GeneratorKind, RandomNumberFactory};
//!
//! let kind: GeneratorKind = "mwc".parse().unwrap();
//! let mut rng = RandomNumberFactory::with_seed(kind, 12345);
//!
//! let die = rng.gen_int(6).unwrap() + 1;
//! assert!((1..=6).contains(&die));
//!
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `GeneratorKind`

#![deny(missing_docs)]

pub mod rng;
