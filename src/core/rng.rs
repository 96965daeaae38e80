//! Deterministic random number generation for dice sessions.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Context streams**: Independent sequences per contestant, so one
//!   contestant's draws never shift the other's
//!
//! ## Usage
//!
//! ```
//! use cheaters_dice::core::GameRng;
//!
//! let session = GameRng::new(42);
//!
//! let mut human = session.for_context("human");
//! let mut computer = session.for_context("computer");
//!
//! let face = human.gen_range_inclusive(1, 6);
//! assert!((1..=6).contains(&face));
//!
//! // Same seed and context always replay the same stream
//! let mut replay = GameRng::new(42).for_context("human");
//! assert_eq!(replay.gen_range_inclusive(1, 6), face);
//! # let _ = computer.gen_bool(0.5);
//! ```

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Deterministic RNG backing every die in a session.
///
/// Uses ChaCha8 for speed while keeping a high-quality uniform stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// The chosen seed is still recorded, see [`GameRng::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().next_u64())
    }

    /// The seed this stream was built from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
        }
    }

    /// Generate a uniform integer in `[low, high]`.
    pub fn gen_range_inclusive(&mut self, low: u8, high: u8) -> u8 {
        self.inner.gen_range(low..=high)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }
}
