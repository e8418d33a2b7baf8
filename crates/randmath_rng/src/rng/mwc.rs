//! Marsaglia's multiply-with-carry generator.

use super::backend::{concat_words, GeneratorBackend};

const DEFAULT_W: u32 = 521_288_629;
const DEFAULT_Z: u32 = 362_436_069;

/// Multiply-with-carry generator with two 32-bit lag-1 components.
///
/// Each step updates
/// `z = 36969 (z & 0xFFFF) + (z >> 16)` and `w = 18000 (w & 0xFFFF) + (w >> 16)`
/// and emits `(z << 16) + w`, all modulo 2^32.
///
/// # Examples
/// ```
/// use randmath_rng::rng::{GeneratorBackend, MultiplyWithCarry};
///
/// let mut mwc = MultiplyWithCarry::new();
/// assert_eq!(mwc.next_raw_uint(), 820_856_226);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiplyWithCarry {
    w: u32,
    z: u32,
}

impl Default for MultiplyWithCarry {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiplyWithCarry {
    /// Creates a generator in Marsaglia's default state.
    pub fn new() -> Self {
        Self {
            w: DEFAULT_W,
            z: DEFAULT_Z,
        }
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.z = 36969_u32
            .wrapping_mul(self.z & 0xFFFF)
            .wrapping_add(self.z >> 16);
        self.w = 18000_u32
            .wrapping_mul(self.w & 0xFFFF)
            .wrapping_add(self.w >> 16);
        (self.z << 16).wrapping_add(self.w)
    }
}

impl GeneratorBackend for MultiplyWithCarry {
    /// Seeds `w` from the upper bits and `z` from the lower 32 bits of `u`.
    fn set_seed(&mut self, u: u64) {
        self.set_seed_pair(u >> 16, u);
    }

    /// Replaces `w` and `z` with the low 32 bits of `u` and `v`.
    ///
    /// A zero component would lock the generator, so a part that truncates
    /// to zero selects Marsaglia's default for that component instead.
    fn set_seed_pair(&mut self, u: u64, v: u64) {
        let (u, v) = (u as u32, v as u32);
        self.w = if u != 0 { u } else { DEFAULT_W };
        self.z = if v != 0 { v } else { DEFAULT_Z };
    }

    fn next_raw_long(&mut self) -> i64 {
        let high = self.next_u32();
        let low = self.next_u32();
        concat_words(high, low)
    }

    #[inline]
    fn next_raw_uint(&mut self) -> u64 {
        self.next_u32() as u64
    }
}
