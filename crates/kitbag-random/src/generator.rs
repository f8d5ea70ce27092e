//! The range-remembering random generator.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use kitbag_core::clock::{Clock, SystemClock};
use kitbag_core::error::UsageError;
use kitbag_core::rng::DeterministicRng;

use crate::config::{GeneratorConfig, InvertedBoundsPolicy};
use crate::source::StdSource;

/// The range a sampling call should use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Bounds {
    /// Reuse the range stored by the previous call.
    #[default]
    UseStored,
    /// Sample from `[0, max]`.
    MaxOnly(i64),
    /// Sample from `[min, max]`.
    MaxAndMin {
        /// Inclusive upper bound.
        max: i64,
        /// Inclusive lower bound.
        min: i64,
    },
}

impl Bounds {
    /// Builds `MaxAndMin` from positional arguments, maximum first.
    #[must_use]
    pub const fn max_and_min(max: i64, min: i64) -> Self {
        Self::MaxAndMin { max, min }
    }

    /// The `(min, max)` pair this request resolves to, given the stored range.
    const fn requested(self, stored: (i64, i64)) -> (i64, i64) {
        match self {
            Self::UseStored => stored,
            Self::MaxOnly(max) => (0, max),
            Self::MaxAndMin { max, min } => (min, max),
        }
    }
}

/// Everything the lock protects.
struct GeneratorState {
    min: i64,
    max: i64,
    source: Box<dyn DeterministicRng>,
}

impl GeneratorState {
    fn sample(&mut self) -> i64 {
        let offset = self.source.next_up_to(self.max.abs_diff(self.min));
        self.min.wrapping_add_unsigned(offset)
    }
}

/// A pseudorandom integer generator with a stored inclusive range.
///
/// This type is stateful: every call that supplies [`Bounds`] overwrites the
/// stored range, and later `Bounds::UseStored` calls sample from it. The whole
/// body of each method, including the range update, runs under one lock.
pub struct RandomGenerator {
    state: Mutex<GeneratorState>,
    clock: Box<dyn Clock>,
    policy: InvertedBoundsPolicy,
}

impl RandomGenerator {
    /// Creates a generator over `[0, 10]`, seeded from the system clock.
    #[must_use]
    pub fn new() -> Self {
        let seed = SystemClock.unix_seconds();
        Self::assemble(
            0,
            10,
            InvertedBoundsPolicy::default(),
            StdSource::from_seed(seed),
            SystemClock,
        )
    }

    /// Creates a generator from `config`, using [`StdSource`] and the system
    /// clock.
    ///
    /// # Errors
    ///
    /// Returns `UsageError::InvertedBounds` if the configured range is
    /// inverted and the policy is `Reject`.
    pub fn with_config(config: GeneratorConfig) -> Result<Self, UsageError> {
        let seed = config.seed.unwrap_or_else(|| SystemClock.unix_seconds());
        Self::with_parts(config, StdSource::from_seed(seed), SystemClock)
    }

    /// Creates a generator from `config` with an injected source and clock.
    ///
    /// The source is seeded with `config.seed`, or with the clock's unix
    /// seconds when no seed is configured.
    ///
    /// # Errors
    ///
    /// Returns `UsageError::InvertedBounds` if the configured range is
    /// inverted and the policy is `Reject`.
    pub fn with_parts(
        config: GeneratorConfig,
        mut source: impl DeterministicRng + 'static,
        clock: impl Clock + 'static,
    ) -> Result<Self, UsageError> {
        let (min, max) = config.validate()?;
        source.reseed(config.seed.unwrap_or_else(|| clock.unix_seconds()));
        Ok(Self::assemble(min, max, config.inverted_bounds, source, clock))
    }

    fn assemble(
        min: i64,
        max: i64,
        policy: InvertedBoundsPolicy,
        source: impl DeterministicRng + 'static,
        clock: impl Clock + 'static,
    ) -> Self {
        Self {
            state: Mutex::new(GeneratorState {
                min,
                max,
                source: Box::new(source),
            }),
            clock: Box::new(clock),
            policy,
        }
    }

    /// Sets the source's seed to `seed`.
    pub fn seed(&self, seed: i64) {
        self.lock().source.reseed(seed);
        tracing::debug!(seed, "generator seeded");
    }

    /// Sets the source's seed to the clock's current unix seconds.
    pub fn reseed(&self) {
        let mut state = self.lock();
        self.reseed_locked(&mut state);
    }

    /// Returns a value uniformly distributed over the range selected by
    /// `bounds`, continuing the current sequence.
    ///
    /// The selected range is stored and becomes the default for later
    /// `Bounds::UseStored` calls.
    ///
    /// # Errors
    ///
    /// Returns `UsageError::InvertedBounds` if the requested `min` exceeds
    /// `max` and the policy is `Reject`. The stored range is left unchanged.
    pub fn random(&self, bounds: Bounds) -> Result<i64, UsageError> {
        let mut state = self.lock();
        self.store_bounds(&mut state, bounds)?;
        let value = state.sample();
        tracing::trace!(value, min = state.min, max = state.max, "sampled");
        Ok(value)
    }

    /// Like [`random`](Self::random), but reseeds from the clock immediately
    /// before sampling.
    ///
    /// # Errors
    ///
    /// Returns `UsageError::InvertedBounds` if the requested `min` exceeds
    /// `max` and the policy is `Reject`. Neither the range nor the seed is
    /// changed in that case.
    pub fn next_random(&self, bounds: Bounds) -> Result<i64, UsageError> {
        let mut state = self.lock();
        self.store_bounds(&mut state, bounds)?;
        self.reseed_locked(&mut state);
        let value = state.sample();
        tracing::trace!(value, min = state.min, max = state.max, "sampled after reseed");
        Ok(value)
    }

    /// Returns the stored `(min, max)` range.
    #[must_use]
    pub fn range(&self) -> (i64, i64) {
        let state = self.lock();
        (state.min, state.max)
    }

    fn store_bounds(&self, state: &mut GeneratorState, bounds: Bounds) -> Result<(), UsageError> {
        if bounds == Bounds::UseStored {
            return Ok(());
        }
        let (min, max) = bounds.requested((state.min, state.max));
        let (min, max) = self.policy.resolve(min, max)?;
        state.min = min;
        state.max = max;
        tracing::debug!(min, max, "generator range updated");
        Ok(())
    }

    fn reseed_locked(&self, state: &mut GeneratorState) {
        let seed = self.clock.unix_seconds();
        state.source.reseed(seed);
        tracing::debug!(seed, "generator reseeded from clock");
    }

    fn lock(&self) -> MutexGuard<'_, GeneratorState> {
        self.state.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            tracing::warn!("generator mutex poisoned; recovering state");
            poisoned.into_inner()
        })
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RandomGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (min, max) = self.range();
        f.debug_struct("RandomGenerator")
            .field("min", &min)
            .field("max", &max)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
