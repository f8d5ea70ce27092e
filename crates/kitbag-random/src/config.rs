//! Generator configuration.

use kitbag_core::error::UsageError;
use serde::{Deserialize, Serialize};

/// What a generator does when asked for a range whose `min` exceeds `max`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvertedBoundsPolicy {
    /// Return [`UsageError::InvertedBounds`] and keep the stored range.
    #[default]
    Reject,
    /// Exchange the two bounds, then proceed.
    Swap,
}

impl InvertedBoundsPolicy {
    /// Applies the policy to a requested `(min, max)` pair.
    ///
    /// # Errors
    ///
    /// Returns `UsageError::InvertedBounds` if `min > max` under `Reject`.
    pub fn resolve(self, min: i64, max: i64) -> Result<(i64, i64), UsageError> {
        if min <= max {
            return Ok((min, max));
        }
        match self {
            Self::Reject => Err(UsageError::InvertedBounds { min, max }),
            Self::Swap => Ok((max, min)),
        }
    }
}

/// Construction-time settings for a [`RandomGenerator`](crate::RandomGenerator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Initial inclusive lower bound.
    pub min: i64,
    /// Initial inclusive upper bound.
    pub max: i64,
    /// Fixed initial seed. When absent the clock's unix seconds are used.
    pub seed: Option<i64>,
    /// Handling of `min > max`.
    pub inverted_bounds: InvertedBoundsPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min: 0,
            max: 10,
            seed: None,
            inverted_bounds: InvertedBoundsPolicy::Reject,
        }
    }
}

impl GeneratorConfig {
    /// Checks the initial range against the configured policy and returns the
    /// range the generator should start with.
    ///
    /// # Errors
    ///
    /// Returns `UsageError::InvertedBounds` if `min > max` and the policy is
    /// `Reject`.
    pub fn validate(&self) -> Result<(i64, i64), UsageError> {
        self.inverted_bounds.resolve(self.min, self.max)
    }
}
