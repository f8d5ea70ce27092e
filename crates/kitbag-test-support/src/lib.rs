//! Shared test doubles for the Kitbag utility crates.

mod clock;
mod rng;

pub use clock::FixedClock;
pub use rng::{RecordingRng, SeedLog, SequenceRng};
