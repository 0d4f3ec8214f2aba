//! Builder for constructing transitioned values.

use crate::builder::config::TransitionConfig;
use crate::builder::error::BuildError;
use crate::core::{Equality, StateHistory};
use crate::machine::Transitioned;
use crate::policy::{Direct, Indirect, TransitionPolicy};
use crate::timer::Timer;
use std::time::Duration;

/// Builder for transitioned values with a fluent API.
///
/// Defaults: [`Direct`] policy, `PartialEq` equality, 5000 ms delay, no
/// history.
pub struct TransitionedBuilder<T, P = Direct> {
    initial: Option<Option<T>>,
    config: TransitionConfig,
    equality: Option<Equality<T>>,
    policy: P,
    history: Option<Option<usize>>,
}

impl<T> TransitionedBuilder<T, Direct> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            config: TransitionConfig::default(),
            equality: None,
            policy: Direct,
            history: None,
        }
    }
}

impl<T> Default for TransitionedBuilder<T, Direct> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> TransitionedBuilder<T, P> {
    /// Swap the transition policy.
    pub fn policy<Q>(self, policy: Q) -> TransitionedBuilder<T, Q> {
        TransitionedBuilder {
            initial: self.initial,
            config: self.config,
            equality: self.equality,
            policy,
            history: self.history,
        }
    }

    /// Route present-to-present changes through `None`.
    pub fn indirect(self) -> TransitionedBuilder<T, Indirect> {
        self.policy(Indirect)
    }

    /// Set the initial target (required). `None` is a valid target.
    pub fn initial(mut self, target: impl Into<Option<T>>) -> Self {
        self.initial = Some(target.into());
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: TransitionConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the delay, rounded up to whole milliseconds.
    pub fn delay(mut self, delay: Duration) -> Self {
        let ms = delay.as_nanos().div_ceil(1_000_000);
        self.config.delay_ms = Some(u64::try_from(ms).unwrap_or(u64::MAX));
        self
    }

    pub fn delay_ms(mut self, delay_ms: u64) -> Self {
        self.config.delay_ms = Some(delay_ms);
        self
    }

    /// Compare present targets with `comparator` instead of `PartialEq`.
    pub fn equal<F>(mut self, comparator: F) -> Self
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        self.equality = Some(Equality::by(comparator));
        self
    }

    /// Keep an in-memory history of every applied change.
    pub fn record_history(mut self) -> Self {
        self.history = Some(None);
        self
    }

    /// Keep an in-memory history of the last `capacity` applied changes.
    pub fn record_history_capped(mut self, capacity: usize) -> Self {
        self.history = Some(Some(capacity));
        self
    }

    /// Build the transitioned value around `timer`.
    ///
    /// Targets are compared with `PartialEq` unless [`equal`](Self::equal)
    /// was called. Returns an error if no initial target was given.
    pub fn build<Tm: Timer>(mut self, timer: Tm) -> Result<Transitioned<T, P, Tm>, BuildError>
    where
        T: PartialEq + 'static,
        P: TransitionPolicy<T>,
    {
        let equality = self.equality.take().unwrap_or_else(Equality::strict);
        self.assemble(equality, timer)
    }

    /// Build with the comparator given to [`equal`](Self::equal), for
    /// targets without `PartialEq`.
    ///
    /// Returns an error if no initial target or no comparator was given.
    pub fn build_compared<Tm: Timer>(
        mut self,
        timer: Tm,
    ) -> Result<Transitioned<T, P, Tm>, BuildError>
    where
        P: TransitionPolicy<T>,
    {
        let equality = self.equality.take().ok_or(BuildError::MissingComparator)?;
        self.assemble(equality, timer)
    }

    fn assemble<Tm: Timer>(
        self,
        equality: Equality<T>,
        timer: Tm,
    ) -> Result<Transitioned<T, P, Tm>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialTarget)?;
        let history = self.history.map(|capacity| match capacity {
            Some(capacity) => StateHistory::bounded(capacity),
            None => StateHistory::new(),
        });

        Ok(Transitioned::from_parts(
            initial,
            self.policy,
            equality,
            self.config.delay(),
            timer,
            history,
        ))
    }
}
