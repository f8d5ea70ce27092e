//! Kitbag Text — padding for strings and byte buffers.

pub mod pad;

pub use pad::{left_pad, left_pad_bytes, pad, pad_bytes};
