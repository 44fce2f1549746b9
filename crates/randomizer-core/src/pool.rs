//! Bounded pool of reusable hash-seed handles.
//!
//! Two independent entropy paths live here:
//!
//! 1. A bounded free-list of [`SeedHandle`]s — keyed streaming hashers that
//!    are expensive to construct (each needs its own OS-seeded key) and are
//!    amortized across calls via [`HashPool::acquire`]/[`HashPool::release`].
//! 2. An atomic SplitMix64 counter behind [`HashPool::sum32`]/
//!    [`HashPool::sum64`] — no allocation, a single atomic fetch-add, safe
//!    under arbitrary contention.
//!
//! Neither path can fail. A pool built with capacity 0 carries no free-list
//! at all; every operation on it still succeeds by allocating on demand or
//! advancing the counter.

use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_queue::ArrayQueue;
use sha2::{Digest, Sha256};

/// Capacity of the process-wide default pool.
pub const DEFAULT_CAPACITY: usize = 64;

/// Weyl-sequence increment for the SplitMix64 counter (odd, 2^64/φ).
pub(crate) const SPLIT_MIX_GAMMA: u64 = 0x9e3779b97f4a7c15;

/// SplitMix64 avalanche finalizer.
///
/// Two xor-shift/multiply rounds followed by a final xor-shift, spreading
/// every input bit across the whole output word. A bare counter goes in, a
/// well-mixed word comes out.
pub(crate) fn split_mix64(x: u64) -> u64 {
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Read 8 bytes from the OS CSPRNG as a `u64`.
///
/// # Panics
/// Panics if the OS CSPRNG fails — this indicates a fatal platform issue.
pub(crate) fn os_seed64() -> u64 {
    let mut raw = [0u8; 8];
    getrandom::fill(&mut raw).expect("OS CSPRNG failed");
    u64::from_le_bytes(raw)
}

// ---------------------------------------------------------------------------
// Seed handles
// ---------------------------------------------------------------------------

/// A reusable keyed streaming hasher.
///
/// The 32-byte key is drawn from the OS CSPRNG at construction and survives
/// [`reset`](Self::reset); absorbed input does not. Two handles never share a
/// key, so the same input hashes differently through different handles.
pub struct SeedHandle {
    key: [u8; 32],
    hasher: Sha256,
}

impl SeedHandle {
    /// Construct a freshly keyed handle.
    ///
    /// This is the expensive operation the pool exists to amortize.
    ///
    /// # Panics
    /// Panics if the OS CSPRNG fails.
    pub fn new() -> Self {
        let mut key = [0u8; 32];
        getrandom::fill(&mut key).expect("OS CSPRNG failed");
        let hasher = Self::primed(&key);
        Self { key, hasher }
    }

    fn primed(key: &[u8; 32]) -> Sha256 {
        let mut h = Sha256::new();
        h.update(key);
        h
    }

    /// Absorb `bytes` into the running hash.
    pub fn write(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    /// Digest of the key plus everything written so far, folded to 64 bits.
    ///
    /// Does not consume the absorbed input; writing more after `sum64`
    /// extends the same stream.
    pub fn sum64(&self) -> u64 {
        let digest = self.hasher.clone().finalize();
        let mut word = [0u8; 8];
        word.copy_from_slice(&digest[..8]);
        u64::from_le_bytes(word)
    }

    /// Discard absorbed input, keeping the key.
    pub fn reset(&mut self) {
        self.hasher = Self::primed(&self.key);
    }
}

impl Default for SeedHandle {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// The pool
// ---------------------------------------------------------------------------

/// Bounded, non-blocking pool of [`SeedHandle`]s plus a lock-free counter.
///
/// `acquire` takes a pooled handle if one is available and allocates
/// otherwise; `release` gives a handle back if there is room and drops it
/// otherwise. Neither side ever blocks or fails. The number of pooled slots
/// never exceeds the construction capacity.
pub struct HashPool {
    slots: Option<ArrayQueue<SeedHandle>>,
    state: AtomicU64,
}

impl HashPool {
    /// Create a pool with `capacity` pre-seeded slots.
    ///
    /// Capacity 0 yields the degraded pool: no free-list is allocated,
    /// `acquire` always constructs a fresh handle and `release` always
    /// drops. The counter path is unaffected.
    ///
    /// # Panics
    /// Panics if the OS CSPRNG fails while seeding.
    pub fn new(capacity: usize) -> Self {
        let slots = (capacity > 0).then(|| {
            let queue = ArrayQueue::new(capacity);
            for _ in 0..capacity {
                let _ = queue.push(SeedHandle::new());
            }
            queue
        });
        // The counter must never start at zero: zero survives the first
        // fetch-add as a plain gamma multiple and weakens early output.
        let mut seed = os_seed64();
        if seed == 0 {
            seed = SPLIT_MIX_GAMMA;
        }
        log::debug!("hash pool ready: {capacity} pre-seeded slot(s)");
        Self {
            slots,
            state: AtomicU64::new(seed),
        }
    }

    /// Number of slots this pool can hold. 0 for the degraded pool.
    pub fn capacity(&self) -> usize {
        self.slots.as_ref().map_or(0, ArrayQueue::capacity)
    }

    /// Take a handle from the pool, or allocate a fresh one if none is
    /// available. Never blocks.
    pub fn acquire(&self) -> SeedHandle {
        self.slots
            .as_ref()
            .and_then(ArrayQueue::pop)
            .unwrap_or_default()
    }

    /// Reset `handle` and return it to the pool. If the pool is full (or
    /// has no free-list), the handle is dropped instead. Never blocks.
    pub fn release(&self, mut handle: SeedHandle) {
        let Some(queue) = self.slots.as_ref() else {
            return;
        };
        handle.reset();
        let _ = queue.push(handle);
    }

    /// One-shot keyed hash of `data` through a pooled handle.
    ///
    /// The handle's key randomizes the result, so the same input hashes
    /// differently across pools (and across handles within one pool).
    pub fn hash_bytes(&self, data: &[u8]) -> u64 {
        let mut handle = self.acquire();
        handle.write(data);
        let word = handle.sum64();
        self.release(handle);
        word
    }

    /// Advance the counter and mix. Independent of the free-list; the
    /// fetch-add is the only contention point.
    fn next64(&self) -> u64 {
        let counter = self
            .state
            .fetch_add(SPLIT_MIX_GAMMA, Ordering::Relaxed)
            .wrapping_add(SPLIT_MIX_GAMMA);
        split_mix64(counter)
    }

    /// Append 8 random little-endian bytes to `buf`.
    pub fn sum(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.next64().to_le_bytes());
    }

    /// Random 32-bit word (high half of a 64-bit draw).
    pub fn sum32(&self) -> u32 {
        (self.next64() >> 32) as u32
    }

    /// Random 64-bit word.
    pub fn sum64(&self) -> u64 {
        self.next64()
    }
}
