//! Generator capability and algorithm selection.

use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use randmath_core::types::MathError;

/// Raw output capability shared by every generator backend.
///
/// For a fixed seed and backend the raw sequence is deterministic, so
/// reseeding with the same value replays the same outputs.
pub trait GeneratorBackend {
    /// Reseeds from a single 64-bit value.
    fn set_seed(&mut self, u: u64);

    /// Reseeds from two parts. Backends with a single-part seed ignore `v`.
    fn set_seed_pair(&mut self, u: u64, v: u64);

    /// Reseeds from the current Unix time in milliseconds.
    fn set_seed_from_system_time(&mut self) {
        self.set_seed(system_time_millis());
    }

    /// Next 64 raw bits as a signed integer.
    fn next_raw_long(&mut self) -> i64;

    /// Next raw value in `[0, 2^32 - 1]`.
    fn next_raw_uint(&mut self) -> u64;
}

/// Current Unix time in milliseconds, `0` if the clock is before the epoch.
pub(crate) fn system_time_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Joins two 32-bit outputs into a signed 64-bit value, high word first.
#[inline]
pub(crate) fn concat_words(high: u32, low: u32) -> i64 {
    (((high as u64) << 32) | low as u64) as i64
}

/// Selects the generator algorithm backing a factory.
///
/// # Parsing
/// Accepts the short and long names, case-insensitively:
/// `mwc` / `multiply_with_carry`, `mt` / `mersenne_twister`,
/// `lcg` / `linear_congruential`.
///
/// # Examples
/// ```
/// use randmath_rng::rng::GeneratorKind;
///
/// let kind: GeneratorKind = "MT".parse().unwrap();
/// assert_eq!(kind, GeneratorKind::MersenneTwister);
/// assert_eq!(kind.to_string(), "MERSENNE_TWISTER");
/// assert_eq!(GeneratorKind::default(), GeneratorKind::MultiplyWithCarry);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GeneratorKind {
    /// Marsaglia's multiply-with-carry.
    #[default]
    MultiplyWithCarry,
    /// MT19937 Mersenne Twister.
    MersenneTwister,
    /// 48-bit linear congruential generator.
    LinearCongruential,
}

impl GeneratorKind {
    /// All kinds, in declaration order.
    pub const ALL: [GeneratorKind; 3] = [
        GeneratorKind::MultiplyWithCarry,
        GeneratorKind::MersenneTwister,
        GeneratorKind::LinearCongruential,
    ];

    /// Canonical upper-snake algorithm name.
    pub fn algorithm_name(&self) -> &'static str {
        match self {
            GeneratorKind::MultiplyWithCarry => "MULTIPLY_WITH_CARRY",
            GeneratorKind::MersenneTwister => "MERSENNE_TWISTER",
            GeneratorKind::LinearCongruential => "LINEAR_CONGRUENTIAL",
        }
    }
}

impl FromStr for GeneratorKind {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mwc" | "multiply_with_carry" => Ok(GeneratorKind::MultiplyWithCarry),
            "mt" | "mersenne_twister" => Ok(GeneratorKind::MersenneTwister),
            "lcg" | "linear_congruential" => Ok(GeneratorKind::LinearCongruential),
            _ => Err(MathError::invalid(
                "generator",
                format!("unknown generator algorithm '{}'", s),
            )),
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.algorithm_name())
    }
}
