//! Closed sum type over the generator backends.

use super::backend::{GeneratorBackend, GeneratorKind};
use super::lcg::LinearCongruential;
use super::mt::MersenneTwister;
use super::mwc::MultiplyWithCarry;

/// One of the built-in generator backends.
///
/// Dispatch is a `match` over the variants; there is no trait object.
/// `Generator` also implements [`rand::RngCore`], so any backend can drive
/// `rand` and `rand_distr` samplers.
///
/// # Examples
/// ```
/// use rand::Rng;
/// use randmath_rng::rng::{Generator, GeneratorKind};
///
/// let mut generator = Generator::new(GeneratorKind::LinearCongruential);
/// let die: u32 = generator.gen_range(1..=6);
/// assert!((1..=6).contains(&die));
/// ```
#[derive(Debug, Clone)]
pub enum Generator {
    /// Multiply-with-carry backend.
    MultiplyWithCarry(MultiplyWithCarry),
    /// Mersenne Twister backend.
    MersenneTwister(MersenneTwister),
    /// Linear congruential backend.
    LinearCongruential(LinearCongruential),
}

impl Generator {
    /// Creates the backend for `kind` in its fixed default state.
    pub fn new(kind: GeneratorKind) -> Self {
        match kind {
            GeneratorKind::MultiplyWithCarry => {
                Generator::MultiplyWithCarry(MultiplyWithCarry::new())
            }
            GeneratorKind::MersenneTwister => Generator::MersenneTwister(MersenneTwister::default()),
            GeneratorKind::LinearCongruential => {
                Generator::LinearCongruential(LinearCongruential::default())
            }
        }
    }

    /// Creates the backend for `kind` and seeds it with `seed`.
    pub fn with_seed(kind: GeneratorKind, seed: u64) -> Self {
        let mut generator = Self::new(kind);
        generator.set_seed(seed);
        generator
    }

    /// The algorithm behind this generator.
    pub fn kind(&self) -> GeneratorKind {
        match self {
            Generator::MultiplyWithCarry(_) => GeneratorKind::MultiplyWithCarry,
            Generator::MersenneTwister(_) => GeneratorKind::MersenneTwister,
            Generator::LinearCongruential(_) => GeneratorKind::LinearCongruential,
        }
    }

    #[inline]
    fn next_u32_raw(&mut self) -> u32 {
        // next_raw_uint is bounded by 2^32 - 1
        self.next_raw_uint() as u32
    }
}

impl GeneratorBackend for Generator {
    fn set_seed(&mut self, u: u64) {
        match self {
            Generator::MultiplyWithCarry(g) => g.set_seed(u),
            Generator::MersenneTwister(g) => g.set_seed(u),
            Generator::LinearCongruential(g) => g.set_seed(u),
        }
    }

    fn set_seed_pair(&mut self, u: u64, v: u64) {
        match self {
            Generator::MultiplyWithCarry(g) => g.set_seed_pair(u, v),
            Generator::MersenneTwister(g) => g.set_seed_pair(u, v),
            Generator::LinearCongruential(g) => g.set_seed_pair(u, v),
        }
    }

    fn set_seed_from_system_time(&mut self) {
        match self {
            Generator::MultiplyWithCarry(g) => g.set_seed_from_system_time(),
            Generator::MersenneTwister(g) => g.set_seed_from_system_time(),
            Generator::LinearCongruential(g) => g.set_seed_from_system_time(),
        }
    }

    #[inline]
    fn next_raw_long(&mut self) -> i64 {
        match self {
            Generator::MultiplyWithCarry(g) => g.next_raw_long(),
            Generator::MersenneTwister(g) => g.next_raw_long(),
            Generator::LinearCongruential(g) => g.next_raw_long(),
        }
    }

    #[inline]
    fn next_raw_uint(&mut self) -> u64 {
        match self {
            Generator::MultiplyWithCarry(g) => g.next_raw_uint(),
            Generator::MersenneTwister(g) => g.next_raw_uint(),
            Generator::LinearCongruential(g) => g.next_raw_uint(),
        }
    }
}

impl rand::RngCore for Generator {
    fn next_u32(&mut self) -> u32 {
        self.next_u32_raw()
    }

    fn next_u64(&mut self) -> u64 {
        let high = self.next_u32_raw() as u64;
        let low = self.next_u32_raw() as u64;
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32_raw().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
