//! MT19937 Mersenne Twister (32-bit).

use super::backend::{concat_words, GeneratorBackend};

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_B0DF;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7FFF_FFFF;
const DEFAULT_SEED: u32 = 5489;

/// 32-bit Mersenne Twister with period 2^19937 - 1.
///
/// `with_seed32` performs the classic `init_genrand`; [`GeneratorBackend::set_seed`]
/// initialises by array from the two 32-bit halves of the seed, so every bit
/// of a 64-bit seed affects the state.
///
/// # Examples
/// ```
/// use randmath_rng::rng::{GeneratorBackend, MersenneTwister};
///
/// let mut mt = MersenneTwister::with_seed32(5489);
/// assert_eq!(mt.next_raw_uint(), 3_499_211_612);
/// ```
#[derive(Clone)]
pub struct MersenneTwister {
    state: Box<[u32; N]>,
    index: usize,
}

impl std::fmt::Debug for MersenneTwister {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MersenneTwister")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl Default for MersenneTwister {
    fn default() -> Self {
        Self::with_seed32(DEFAULT_SEED)
    }
}

impl MersenneTwister {
    /// Creates a generator with `init_genrand(seed)`.
    pub fn with_seed32(seed: u32) -> Self {
        let mut mt = Self {
            state: Box::new([0; N]),
            index: N,
        };
        mt.init_genrand(seed);
        mt
    }

    /// Creates a generator with `init_by_array(key)`.
    pub fn with_key(key: &[u32]) -> Self {
        let mut mt = Self {
            state: Box::new([0; N]),
            index: N,
        };
        mt.init_by_array(key);
        mt
    }

    fn init_genrand(&mut self, seed: u32) {
        self.state[0] = seed;
        for i in 1..N {
            let prev = self.state[i - 1];
            self.state[i] = 1_812_433_253_u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        self.index = N;
    }

    fn init_by_array(&mut self, key: &[u32]) {
        self.init_genrand(19_650_218);
        if key.is_empty() {
            return;
        }

        let mut i = 1;
        let mut j = 0;
        for _ in 0..N.max(key.len()) {
            let prev = self.state[i - 1];
            self.state[i] = (self.state[i] ^ (prev ^ (prev >> 30)).wrapping_mul(1_664_525))
                .wrapping_add(key[j])
                .wrapping_add(j as u32);
            i += 1;
            j += 1;
            if i >= N {
                self.state[0] = self.state[N - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }
        for _ in 0..N - 1 {
            let prev = self.state[i - 1];
            self.state[i] = (self.state[i] ^ (prev ^ (prev >> 30)).wrapping_mul(1_566_083_941))
                .wrapping_sub(i as u32);
            i += 1;
            if i >= N {
                self.state[0] = self.state[N - 1];
                i = 1;
            }
        }

        // MSB is 1, assuring a non-zero initial array
        self.state[0] = UPPER_MASK;
        self.index = N;
    }

    /// Regenerates all `N` words of state.
    fn twist(&mut self) {
        for k in 0..N {
            let y = (self.state[k] & UPPER_MASK) | (self.state[(k + 1) % N] & LOWER_MASK);
            let mag = if y & 1 == 0 { 0 } else { MATRIX_A };
            self.state[k] = self.state[(k + M) % N] ^ (y >> 1) ^ mag;
        }
        self.index = 0;
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }
        let mut y = self.state[self.index];
        self.index += 1;

        // Tempering
        y ^= y >> 11;
        y ^= (y << 7) & 0x9D2C_5680;
        y ^= (y << 15) & 0xEFC6_0000;
        y ^= y >> 18;
        y
    }
}

impl GeneratorBackend for MersenneTwister {
    fn set_seed(&mut self, u: u64) {
        self.init_by_array(&[u as u32, (u >> 32) as u32]);
    }

    fn set_seed_pair(&mut self, u: u64, _v: u64) {
        self.set_seed(u);
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
