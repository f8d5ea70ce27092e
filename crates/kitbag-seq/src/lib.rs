//! Kitbag Seq — generic helpers over slices and vectors.
//!
//! Summation is constrained to [`Summable`] element types and search to
//! `PartialEq`, so unsupported inputs are compile errors rather than runtime
//! failures. Removal reports bad indexes as [`UsageError`](kitbag_core::error::UsageError).

pub mod iter;
pub mod remove;
pub mod search;
pub mod sum;

pub use iter::{for_each, visit_each};
pub use remove::{remove_ordered, remove_unordered};
pub use search::{contains_item, contains_item_once, index_of, indexes_of, last_index_of};
pub use sum::{Summable, checked_sum, sum};
