//! Derived-distribution sampling on top of a generator backend.

use std::f64::consts::PI;

use randmath_core::types::error::{ensure_positive, MathError, MathResult};
use tracing::debug;

use super::backend::{GeneratorBackend, GeneratorKind};
use super::generator::Generator;

/// `1 / (2^32 + 2)`, mapping raw 32-bit draws strictly inside (0, 1).
const UNIFORM_SCALE: f64 = 1.0 / 4_294_967_298.0;

/// Random number factory.
///
/// Owns exactly one [`Generator`], selected at construction, and turns its
/// raw output into uniform, normal, gamma and related variates.
///
/// Every method that takes distribution parameters validates them before
/// drawing, so a rejected call leaves the generator state untouched.
///
/// # Reproducibility
///
/// Each draw is a pure function of the generator's next outputs: the same
/// backend, seed and call sequence always yield the same values.
///
/// # Examples
///
/// ```rust
/// use randmath_rng::rng::{GeneratorKind, RandomNumberFactory};
///
/// let mut rng = RandomNumberFactory::with_seed(GeneratorKind::MersenneTwister, 2024);
///
/// let u = rng.gen_uniform();
/// assert!(u > 0.0 && u < 1.0);
///
/// let g = rng.gen_gamma(2.0, 3.0).unwrap();
/// assert!(g > 0.0);
///
/// assert!(rng.gen_beta(0.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RandomNumberFactory {
    generator: Generator,
}

impl Default for RandomNumberFactory {
    fn default() -> Self {
        Self::new(GeneratorKind::default())
    }
}

impl RandomNumberFactory {
    /// Creates a factory over the backend for `kind` in its fixed default state.
    pub fn new(kind: GeneratorKind) -> Self {
        debug!(algorithm = %kind, "creating random number factory");
        Self {
            generator: Generator::new(kind),
        }
    }

    /// Creates a factory and seeds its backend.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randmath_rng::rng::{GeneratorKind, RandomNumberFactory};
    ///
    /// let mut a = RandomNumberFactory::with_seed(GeneratorKind::MultiplyWithCarry, 7);
    /// let mut b = RandomNumberFactory::with_seed(GeneratorKind::MultiplyWithCarry, 7);
    /// assert_eq!(a.gen_normal(), b.gen_normal());
    /// ```
    pub fn with_seed(kind: GeneratorKind, seed: u64) -> Self {
        let mut factory = Self::new(kind);
        factory.set_seed(seed);
        factory
    }

    /// Wraps an existing generator.
    pub fn from_generator(generator: Generator) -> Self {
        debug!(algorithm = %generator.kind(), "wrapping generator in factory");
        Self { generator }
    }

    /// The selected backend.
    #[inline]
    pub fn kind(&self) -> GeneratorKind {
        self.generator.kind()
    }

    /// Canonical name of the selected backend.
    #[inline]
    pub fn algorithm_name(&self) -> &'static str {
        self.kind().algorithm_name()
    }

    /// Mutable access to the backend, e.g. to drive `rand` samplers.
    #[inline]
    pub fn generator_mut(&mut self) -> &mut Generator {
        &mut self.generator
    }

    // ========================================================================
    // Pass-throughs
    // ========================================================================

    /// Reseeds the backend.
    pub fn set_seed(&mut self, u: u64) {
        debug!(algorithm = %self.kind(), seed = u, "reseeding generator");
        self.generator.set_seed(u);
    }

    /// Reseeds the backend from two parts.
    pub fn set_seed_pair(&mut self, u: u64, v: u64) {
        debug!(algorithm = %self.kind(), u, v, "reseeding generator from seed pair");
        self.generator.set_seed_pair(u, v);
    }

    /// Reseeds the backend from the system clock.
    pub fn set_seed_from_system_time(&mut self) {
        debug!(algorithm = %self.kind(), "reseeding generator from system time");
        self.generator.set_seed_from_system_time();
    }

    /// Next raw 64-bit output.
    #[inline]
    pub fn next_raw_long(&mut self) -> i64 {
        self.generator.next_raw_long()
    }

    /// Next raw output in `[0, 2^32 - 1]`.
    #[inline]
    pub fn next_raw_uint(&mut self) -> u64 {
        self.generator.next_raw_uint()
    }

    // ========================================================================
    // Uniform and integer draws
    // ========================================================================

    /// Uniform variate strictly inside (0, 1).
    ///
    /// Computed as `(u + 1) / (2^32 + 2)` from one raw draw `u`, so neither
    /// endpoint is reachable and `ln` of the result is always finite.
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        (self.next_raw_uint() as f64 + 1.0) * UNIFORM_SCALE
    }

    /// Uniform integer in `[0, limit)`.
    ///
    /// Draws whose value falls in the short final bucket of the 32-bit range
    /// are rejected, so every result is equally likely.
    ///
    /// # Errors
    /// `MathError::InvalidArgument` if `limit == 0`.
    pub fn gen_int(&mut self, limit: u32) -> MathResult<u32> {
        if limit == 0 {
            return Err(MathError::invalid("limit", "must be at least 1"));
        }
        // 2^32 mod limit
        let threshold = limit.wrapping_neg() % limit;
        loop {
            let r = self.next_raw_uint() as u32;
            if r >= threshold {
                return Ok(r % limit);
            }
        }
    }

    /// Fills `out` with uniform variates (zero allocation).
    pub fn fill_uniform(&mut self, out: &mut [f64]) {
        for x in out.iter_mut() {
            *x = self.gen_uniform();
        }
    }

    // ========================================================================
    // Normal family
    // ========================================================================

    /// Standard normal variate via the Box-Muller transform.
    ///
    /// Consumes two uniforms and returns the sine branch.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        let u1 = self.gen_uniform();
        let u2 = self.gen_uniform();
        let r = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * PI * u2;
        r * theta.sin()
    }

    /// Fills `out` with standard normal variates (zero allocation).
    pub fn fill_normal(&mut self, out: &mut [f64]) {
        for x in out.iter_mut() {
            *x = self.gen_normal();
        }
    }

    /// Normal variate with the given mean and standard deviation.
    ///
    /// # Errors
    /// `MathError::InvalidArgument` if `stddev <= 0`.
    pub fn gen_normal_with(&mut self, mean: f64, stddev: f64) -> MathResult<f64> {
        ensure_positive("stddev", stddev)?;
        Ok(mean + stddev * self.gen_normal())
    }

    /// Log-normal variate: `exp(N(mu, sigma))`.
    ///
    /// # Errors
    /// `MathError::InvalidArgument` if `sigma <= 0`.
    pub fn gen_log_normal(&mut self, mu: f64, sigma: f64) -> MathResult<f64> {
        Ok(self.gen_normal_with(mu, sigma)?.exp())
    }

    // ========================================================================
    // Exponential family
    // ========================================================================

    /// Exponential variate with mean 1.
    #[inline]
    pub fn gen_exponential(&mut self) -> f64 {
        -self.gen_uniform().ln()
    }

    /// Exponential variate with the given mean.
    ///
    /// # Errors
    /// `MathError::InvalidArgument` if `mean <= 0`.
    pub fn gen_exponential_with_mean(&mut self, mean: f64) -> MathResult<f64> {
        ensure_positive("mean", mean)?;
        Ok(mean * self.gen_exponential())
    }

    /// Laplace (double exponential) variate.
    ///
    /// # Errors
    /// `MathError::InvalidArgument` if `scale <= 0`.
    pub fn gen_laplace(&mut self, mean: f64, scale: f64) -> MathResult<f64> {
        ensure_positive("scale", scale)?;
        let u = self.gen_uniform();
        if u < 0.5 {
            Ok(mean + scale * (2.0 * u).ln())
        } else {
            Ok(mean - scale * (2.0 * (1.0 - u)).ln())
        }
    }

    /// Weibull variate: `scale * (-ln u)^(1/shape)`.
    ///
    /// # Errors
    /// `MathError::InvalidArgument` if `shape <= 0` or `scale <= 0`.
    pub fn gen_weibull(&mut self, shape: f64, scale: f64) -> MathResult<f64> {
        ensure_positive("shape", shape)?;
        ensure_positive("scale", scale)?;
        Ok(scale * (-self.gen_uniform().ln()).powf(1.0 / shape))
    }

    /// Cauchy variate: `median + scale * tan(π (u - 1/2))`.
    ///
    /// # Errors
    /// `MathError::InvalidArgument` if `scale <= 0`.
    pub fn gen_cauchy(&mut self, median: f64, scale: f64) -> MathResult<f64> {
        ensure_positive("scale", scale)?;
        let p = self.gen_uniform();
        Ok(median + scale * (PI * (p - 0.5)).tan())
    }

    // ========================================================================
    // Gamma family
    // ========================================================================

    /// Gamma variate with the given shape and scale.
    ///
    /// Uses Marsaglia and Tsang's squeeze method for `shape >= 1`, and the
    /// boost `Gamma(shape + 1) * U^(1/shape)` below 1.
    ///
    /// # Errors
    /// `MathError::InvalidArgument` if `shape <= 0` or `scale <= 0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randmath_rng::rng::RandomNumberFactory;
    ///
    /// let mut rng = RandomNumberFactory::default();
    /// let mean = (0..10_000)
    ///     .map(|_| rng.gen_gamma(3.0, 2.0).unwrap())
    ///     .sum::<f64>()
    ///     / 10_000.0;
    /// assert!((mean - 6.0).abs() < 0.3);
    /// ```
    pub fn gen_gamma(&mut self, shape: f64, scale: f64) -> MathResult<f64> {
        ensure_positive("shape", shape)?;
        ensure_positive("scale", scale)?;
        Ok(self.sample_gamma(shape, scale))
    }

    /// Gamma draw with pre-validated parameters.
    fn sample_gamma(&mut self, shape: f64, scale: f64) -> f64 {
        if shape < 1.0 {
            let g = self.sample_gamma(shape + 1.0, 1.0);
            let w = self.gen_uniform();
            return scale * g * w.powf(1.0 / shape);
        }

        let d = shape - 1.0 / 3.0;
        let c = 1.0 / (9.0 * d).sqrt();
        loop {
            let (x, v) = loop {
                let x = self.gen_normal();
                let v = 1.0 + c * x;
                if v > 0.0 {
                    break (x, v);
                }
            };
            let v = v * v * v;
            let u = self.gen_uniform();
            let x_squared = x * x;
            if u < 1.0 - 0.0331 * x_squared * x_squared
                || u.ln() < 0.5 * x_squared + d * (1.0 - v + v.ln())
            {
                return scale * d * v;
            }
        }
    }

    /// Chi-squared variate: `Gamma(df / 2, 2)`.
    ///
    /// # Errors
    /// `MathError::InvalidArgument` if `df <= 0`.
    pub fn gen_chi_square(&mut self, df: f64) -> MathResult<f64> {
        ensure_positive("df", df)?;
        Ok(self.sample_gamma(0.5 * df, 2.0))
    }

    /// Inverse gamma variate: `1 / Gamma(shape, 1 / scale)`.
    ///
    /// # Errors
    /// `MathError::InvalidArgument` if `shape <= 0` or `scale <= 0`.
    pub fn gen_inverse_gamma(&mut self, shape: f64, scale: f64) -> MathResult<f64> {
        ensure_positive("shape", shape)?;
        ensure_positive("scale", scale)?;
        Ok(1.0 / self.sample_gamma(shape, 1.0 / scale))
    }

    /// Student's t variate: `N(0, 1) / sqrt(ChiSq(df) / df)`.
    ///
    /// # Errors
    /// `MathError::InvalidArgument` if `df <= 0`.
    pub fn gen_student_t(&mut self, df: f64) -> MathResult<f64> {
        ensure_positive("df", df)?;
        let y1 = self.gen_normal();
        let y2 = self.sample_gamma(0.5 * df, 2.0);
        Ok(y1 / (y2 / df).sqrt())
    }

    /// Beta variate: `X / (X + Y)` with `X ~ Gamma(a, 1)`, `Y ~ Gamma(b, 1)`.
    ///
    /// # Errors
    /// `MathError::InvalidArgument` if `a <= 0` or `b <= 0`.
    pub fn gen_beta(&mut self, a: f64, b: f64) -> MathResult<f64> {
        ensure_positive("a", a)?;
        ensure_positive("b", b)?;
        let x = self.sample_gamma(a, 1.0);
        let y = self.sample_gamma(b, 1.0);
        Ok(x / (x + y))
    }
}
