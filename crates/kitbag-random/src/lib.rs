//! Kitbag Random — a seeded pseudorandom integer generator.
//!
//! [`RandomGenerator`] keeps an inclusive `[min, max]` range that each call
//! may replace; the last range used becomes the default for the next call.
//! All state sits behind one mutex, so a generator can be shared across
//! threads with an `Arc`.

pub mod config;
pub mod generator;
pub mod source;

pub use config::{GeneratorConfig, InvertedBoundsPolicy};
pub use generator::{Bounds, RandomGenerator};
pub use source::StdSource;
