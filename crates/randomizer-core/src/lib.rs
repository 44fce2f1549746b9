//! # randomizer-core
//!
//! Non-cryptographic pseudo-random generation: uniformly distributed
//! integers and floats, fixed-alphabet strings, and protocol-shaped byte
//! sequences (IPv4/IPv6/MAC addresses), all drawing entropy from a small
//! pool of reusable hash-seed state.
//!
//! ## Quick Start
//!
//! ```
//! use randomizer_core::{network, number, word};
//!
//! // Unbiased draw from a half-open interval (bounds in either order).
//! let roll = number::int_interval(1i32, 7i32);
//! assert!((1..7).contains(&roll));
//!
//! // 32 hex digits, no two adjacent digits equal.
//! let token = word::hex(32, false);
//! assert_eq!(token.len(), 32);
//!
//! // A locally administered unicast MAC address.
//! let mac = network::mac_addr(true, false);
//! assert!(mac.is_local() && !mac.is_multicast());
//! ```
//!
//! ## Architecture
//!
//! Pool → WordRng → uniform sampling → typed output
//!
//! - [`pool::HashPool`] is the process-wide entropy root: a bounded
//!   free-list of reusable keyed hash handles plus a lock-free SplitMix64
//!   counter for high-frequency scalar draws.
//! - [`rng::WordRng`] is the per-call word stream: one instance per
//!   call-site, so multi-draw algorithms never contend on shared state.
//! - [`rng::uniform_u64`] maps the word stream onto any `[0, n)` without
//!   modulo bias.
//! - [`number`], [`word`], and [`network`] are thin consumers.
//!
//! Everything is synchronous and total: no operation blocks, fails, or
//! returns an error. This crate is **not** a cryptographic RNG and its
//! streams are not reproducible across runs.

pub mod network;
pub mod number;
pub mod pool;
pub mod rng;
pub mod word;

use std::sync::LazyLock;

pub use network::{MacAddr, MulticastScope, UnicastKind};
pub use number::{SignedInteger, UnsignedInteger};
pub use pool::{DEFAULT_CAPACITY, HashPool, SeedHandle};
pub use rng::{WordRng, uniform_u64};
pub use word::Alphabet;

static DEFAULT_POOL: LazyLock<HashPool> = LazyLock::new(|| HashPool::new(DEFAULT_CAPACITY));

/// The process-wide default pool (capacity [`DEFAULT_CAPACITY`]).
///
/// Constructed lazily on first use and released with the process. Code that
/// needs isolation (tests, benchmarks) can build private [`HashPool`]
/// instances instead; nothing in this crate requires the default.
pub fn default_pool() -> &'static HashPool {
    &DEFAULT_POOL
}

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
