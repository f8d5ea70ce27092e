//! Shared test helpers for Kitbag integration tests.
#![allow(dead_code)]

use std::sync::Once;

use kitbag::{GeneratorConfig, RandomGenerator};
use kitbag_test_support::FixedClock;

/// Fixed unix time used across the integration tests.
pub const FIXED_UNIX: i64 = 1_768_471_200;

static TRACING: Once = Once::new();

/// Installs the tracing subscriber once per test binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        kitbag::telemetry::init_tracing();
    });
}

/// A clock frozen at [`FIXED_UNIX`].
pub fn fixed_clock() -> FixedClock {
    FixedClock::at_unix(FIXED_UNIX)
}

/// A generator with the default range and a fixed seed.
pub fn seeded_generator(seed: i64) -> RandomGenerator {
    RandomGenerator::with_config(GeneratorConfig {
        seed: Some(seed),
        ..GeneratorConfig::default()
    })
    .unwrap()
}
