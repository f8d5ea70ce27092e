//! Test RNGs — deterministic `DeterministicRng` implementations for tests.

use std::sync::{Arc, Mutex};

use kitbag_core::rng::DeterministicRng;

/// An RNG that returns offsets from a predetermined sequence, capped at the
/// requested limit. Panics if the sequence is exhausted. Reseeding rewinds
/// to the start of the sequence.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<u64>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<u64>) -> Self {
        Self { values, index: 0 }
    }
}

impl DeterministicRng for SequenceRng {
    fn reseed(&mut self, _seed: i64) {
        self.index = 0;
    }

    fn next_up_to(&mut self, limit: u64) -> u64 {
        let val = self.values[self.index];
        self.index += 1;
        val.min(limit)
    }
}

/// Shared view of the seeds a [`RecordingRng`] has received.
#[derive(Debug, Clone, Default)]
pub struct SeedLog(Arc<Mutex<Vec<i64>>>);

impl SeedLog {
    /// Returns a snapshot of every seed applied so far, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn seeds(&self) -> Vec<i64> {
        self.0.lock().unwrap().clone()
    }
}

/// An RNG that always returns `0` (the bottom of any range) and records
/// every seed it is given. The log stays readable after the RNG has been
/// moved into a generator.
#[derive(Debug, Default)]
pub struct RecordingRng {
    log: SeedLog,
}

impl RecordingRng {
    /// Create a new recording RNG together with a handle to its seed log.
    #[must_use]
    pub fn new() -> (Self, SeedLog) {
        let log = SeedLog::default();
        (Self { log: log.clone() }, log)
    }
}

impl DeterministicRng for RecordingRng {
    fn reseed(&mut self, seed: i64) {
        self.log.0.lock().unwrap().push(seed);
    }

    fn next_up_to(&mut self, _limit: u64) -> u64 {
        0
    }
}
