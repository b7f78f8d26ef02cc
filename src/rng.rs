//! Deterministic xorshift64* generator for picking seek targets.
//!
//! Not suitable for anything security-sensitive. The generator is a plain
//! value owned by the driver, so a parallel harness would simply hold one
//! per worker.

/// Substituted for a zero seed, which is a fixed point of xorshift.
pub const DEFAULT_SEED: u64 = 88_172_645_463_325_252;

const MULTIPLIER: u64 = 2_685_821_657_736_338_717;

#[derive(Debug, Clone)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { DEFAULT_SEED } else { seed },
        }
    }

    /// Returns the next pseudo-random u64.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(MULTIPLIER)
    }

    /// Returns a value in [0, n). `n` must be non-zero.
    #[inline]
    pub fn next_below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    /// Current internal state (pre-multiplication).
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl Default for XorShift64 {
    fn default() -> Self {
        Self::new(0)
    }
}
