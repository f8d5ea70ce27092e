//! Random source abstraction for determinism.
//!
//! In production, this wraps a real RNG. In tests, a scripted or counting
//! implementation is injected.

/// Abstraction over a reseedable pseudorandom bit source.
pub trait DeterministicRng: Send + Sync {
    /// Resets the source so that its output becomes a function of `seed`.
    fn reseed(&mut self, seed: i64);

    /// Generate a random `u64` in the range `[0, limit]` inclusive.
    fn next_up_to(&mut self, limit: u64) -> u64;
}
