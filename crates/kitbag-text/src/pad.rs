//! Right and left padding to a target length.
//!
//! String lengths are counted in characters, byte buffer lengths in bytes.
//! Padding never truncates: a value already at or past the target length is
//! returned unchanged.

use std::iter;

use kitbag_core::error::UsageError;

/// Extracts the single character of `fill`.
fn fill_char(fill: &str) -> Result<char, UsageError> {
    let mut chars = fill.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(UsageError::InvalidFill {
            len: fill.chars().count(),
        }),
    }
}

/// Number of fill characters needed to bring `value` up to `target_len`.
fn shortfall(value: &str, target_len: usize) -> usize {
    target_len.saturating_sub(value.chars().count())
}

/// Appends `fill` to `value` until it is `target_len` characters long.
///
/// # Errors
///
/// Returns `UsageError::InvalidFill` if `fill` is not exactly one character.
pub fn pad(value: &str, fill: &str, target_len: usize) -> Result<String, UsageError> {
    let c = fill_char(fill)?;
    let mut padded = String::from(value);
    padded.extend(iter::repeat_n(c, shortfall(value, target_len)));
    Ok(padded)
}

/// Prepends `fill` to `value` until it is `target_len` characters long.
///
/// # Errors
///
/// Returns `UsageError::InvalidFill` if `fill` is not exactly one character.
pub fn left_pad(value: &str, fill: &str, target_len: usize) -> Result<String, UsageError> {
    let c = fill_char(fill)?;
    let mut padded: String = iter::repeat_n(c, shortfall(value, target_len)).collect();
    padded.push_str(value);
    Ok(padded)
}

/// Appends `fill` bytes to `value` until it is `target_len` bytes long.
#[must_use]
pub fn pad_bytes(value: &[u8], fill: u8, target_len: usize) -> Vec<u8> {
    let mut padded = value.to_vec();
    padded.resize(target_len.max(value.len()), fill);
    padded
}

/// Prepends `fill` bytes to `value` until it is `target_len` bytes long.
#[must_use]
pub fn left_pad_bytes(value: &[u8], fill: u8, target_len: usize) -> Vec<u8> {
    let mut padded = vec![fill; target_len.saturating_sub(value.len())];
    padded.extend_from_slice(value);
    padded
}
