//! Per-call word generator and unbiased range sampling.
//!
//! [`WordRng`] is the cheap, non-pooled counterpart to the
//! [`HashPool`](crate::pool::HashPool) counter: algorithms that need several
//! draws per logical output (rejection sampling, buffer filling) create one
//! instance on the stack and step it privately instead of round-tripping
//! through shared state per draw.

use crate::pool::{SPLIT_MIX_GAMMA, os_seed64, split_mix64};

/// Ephemeral SplitMix64 word stream.
///
/// One instance per call-site, seeded independently from the OS CSPRNG and
/// owned exclusively by the invocation that created it. Never shared, never
/// persisted.
pub struct WordRng {
    state: u64,
}

impl WordRng {
    /// Seed a fresh instance.
    ///
    /// # Panics
    /// Panics if the OS CSPRNG fails.
    pub fn new() -> Self {
        Self { state: os_seed64() }
    }

    /// Next word in this instance's private stream.
    pub fn next64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(SPLIT_MIX_GAMMA);
        split_mix64(self.state)
    }

    /// Fill `out` with random bytes, 8 little-endian bytes per draw.
    ///
    /// A trailing partial chunk consumes one extra draw and takes only its
    /// low bytes; the unused high bytes are discarded, not carried over.
    pub fn fill(&mut self, out: &mut [u8]) {
        let mut chunks = out.chunks_exact_mut(8);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.next64().to_le_bytes());
        }
        let rest = chunks.into_remainder();
        if !rest.is_empty() {
            let word = self.next64().to_le_bytes();
            rest.copy_from_slice(&word[..rest.len()]);
        }
    }
}

impl Default for WordRng {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniform value in `[0, n)` by modulo rejection. `n == 0` returns 0.
///
/// Plain `x % n` is biased whenever 2^64 is not a multiple of `n`; draws
/// below `threshold = 2^64 mod n` land in the fractional leftover region and
/// are rejected. The loop terminates with probability 1 and takes at most 2
/// draws on average even for the worst-case `n` near 2^63.
pub fn uniform_u64(n: u64, rng: &mut WordRng) -> u64 {
    if n == 0 {
        return 0;
    }
    let threshold = 0u64.wrapping_sub(n) % n;
    loop {
        let x = rng.next64();
        if x >= threshold {
            return x % n;
        }
    }
}
