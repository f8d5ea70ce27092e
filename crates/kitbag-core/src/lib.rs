//! Kitbag Core — shared abstractions.
//!
//! This crate defines the error type, the clock and the random source traits
//! that the other Kitbag crates depend on. It contains no concrete RNG.

pub mod clock;
pub mod error;
pub mod rng;
