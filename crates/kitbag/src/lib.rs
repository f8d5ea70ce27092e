//! Kitbag — a small generic-utility library.
//!
//! Re-exports the member crates:
//!
//! - [`random`]: [`RandomGenerator`], a mutex-guarded generator whose last
//!   used range becomes its default.
//! - [`seq`]: summation, search, removal and iteration over slices.
//! - [`text`]: string and byte padding.
//!
//! Every fallible call returns [`UsageError`].

pub use kitbag_core::{clock, error, rng};
pub use kitbag_random as random;
pub use kitbag_seq as seq;
pub use kitbag_text as text;

pub use kitbag_core::error::UsageError;
pub use kitbag_random::{Bounds, GeneratorConfig, InvertedBoundsPolicy, RandomGenerator};

pub mod telemetry;

/// Commonly used Kitbag items.
pub mod prelude {
    pub use kitbag_core::clock::{Clock, SystemClock};
    pub use kitbag_core::error::UsageError;
    pub use kitbag_core::rng::DeterministicRng;
    pub use kitbag_random::{Bounds, GeneratorConfig, InvertedBoundsPolicy, RandomGenerator};
    pub use kitbag_seq::{
        Summable, checked_sum, contains_item, contains_item_once, for_each, index_of, indexes_of,
        last_index_of, remove_ordered, remove_unordered, sum, visit_each,
    };
    pub use kitbag_text::{left_pad, left_pad_bytes, pad, pad_bytes};
}
