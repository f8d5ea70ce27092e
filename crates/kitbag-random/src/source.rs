//! Production random source backed by `rand`'s `StdRng`.

use kitbag_core::rng::DeterministicRng;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A `DeterministicRng` wrapping [`StdRng`].
///
/// Two sources given the same seed produce the same sequence for a given
/// `rand` release.
#[derive(Debug, Clone)]
pub struct StdSource {
    rng: StdRng,
}

impl StdSource {
    /// Create a source seeded with `seed`.
    #[must_use]
    pub fn from_seed(seed: i64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed_bits(seed)),
        }
    }
}

impl DeterministicRng for StdSource {
    fn reseed(&mut self, seed: i64) {
        self.rng = StdRng::seed_from_u64(seed_bits(seed));
    }

    fn next_up_to(&mut self, limit: u64) -> u64 {
        self.rng.random_range(0..=limit)
    }
}

/// Reinterprets the signed seed as raw bits.
fn seed_bits(seed: i64) -> u64 {
    u64::from_le_bytes(seed.to_le_bytes())
}
