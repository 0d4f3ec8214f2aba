//! Transitioned value owning its pending timer.

use crate::core::{Cause, Equality, StateHistory, StateTransition, TransitionState};
use crate::policy::{Indirect, Step, TransitionPolicy};
use crate::timer::{ManualTimer, Timer, TimerId};
use chrono::Utc;
use std::time::Duration;
use tracing::{debug, trace, warn};

/// A single value transitioning between targets over a fixed delay.
///
/// State only changes on [`on_target_changed`](Self::on_target_changed) and
/// on [`fire`](Self::fire) of the pending timer. At most one timer is
/// pending at any time, and it is cancelled on dispose or drop.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use transitioned::builder::TransitionedBuilder;
/// use transitioned::timer::ManualTimer;
///
/// let mut value = TransitionedBuilder::new()
///     .initial("A1")
///     .delay_ms(500)
///     .build(ManualTimer::new())
///     .unwrap();
///
/// value.on_target_changed("A2");
/// assert!(value.state().transition);
/// assert_eq!(value.state().previous, Some("A1"));
///
/// value.advance(Duration::from_millis(500));
/// assert!(!value.state().transition);
/// assert_eq!(value.state().next, Some("A2"));
/// ```
pub struct Transitioned<T, P, Tm: Timer> {
    state: TransitionState<T>,
    policy: P,
    equality: Equality<T>,
    delay: Duration,
    timer: Tm,
    pending: Option<TimerId>,
    history: Option<StateHistory<T>>,
    revision: u64,
    disposed: bool,
}

/// Transitioned value routing present-to-present changes through `None`.
pub type IndirectTransitioned<T, Tm = ManualTimer> = Transitioned<T, Indirect, Tm>;

impl<T, P, Tm: Timer> Transitioned<T, P, Tm> {
    pub(crate) fn from_parts(
        initial: Option<T>,
        policy: P,
        equality: Equality<T>,
        delay: Duration,
        timer: Tm,
        history: Option<StateHistory<T>>,
    ) -> Self {
        Self {
            state: TransitionState::idle(initial),
            policy,
            equality,
            delay,
            timer,
            pending: None,
            history,
            revision: 0,
            disposed: false,
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> &TransitionState<T> {
        &self.state
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn equality(&self) -> &Equality<T> {
        &self.equality
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn timer(&self) -> &Tm {
        &self.timer
    }

    /// Handle of the pending timer, if a transition is waiting on one.
    pub fn pending(&self) -> Option<TimerId> {
        self.pending
    }

    /// Incremented on every applied state change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Recorded changes, when built with history enabled.
    pub fn history(&self) -> Option<&StateHistory<T>> {
        self.history.as_ref()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Tear down: cancel the pending timer and refuse further changes.
    pub fn on_dispose(&mut self) {
        self.cancel_pending();
        if !self.disposed {
            debug!("transitioned value disposed");
        }
        self.disposed = true;
    }

    fn cancel_pending(&mut self) {
        if let Some(id) = self.pending.take() {
            trace!(%id, "cancelling pending timer");
            self.timer.cancel(id);
        }
    }
}

impl<T, P, Tm> Transitioned<T, P, Tm>
where
    T: Clone,
    P: TransitionPolicy<T>,
    Tm: Timer,
{
    /// Owned copy of the current snapshot.
    pub fn snapshot(&self) -> TransitionState<T> {
        self.state.clone()
    }

    /// Feed a new target value.
    ///
    /// A target the equality policy judges unchanged is ignored outright:
    /// the state stays as it is and a pending timer keeps running.
    pub fn on_target_changed(&mut self, target: impl Into<Option<T>>) {
        if self.disposed {
            warn!("target received after dispose, ignoring");
            return;
        }

        let step = self.policy.receive(&self.state, target.into(), &self.equality);
        self.apply(step, Cause::Target);
    }

    /// Deliver the expiry of a scheduled timer.
    ///
    /// Returns false when `id` is not the pending timer (stale, cancelled or
    /// delivered after dispose); such deliveries change nothing.
    pub fn fire(&mut self, id: TimerId) -> bool {
        if self.disposed || self.pending != Some(id) {
            trace!(%id, "ignoring stale timer");
            return false;
        }

        self.pending = None;
        self.timer.cancel(id);

        let step = self.policy.elapse(&self.state);
        self.apply(step, Cause::Elapsed);
        true
    }

    fn apply(&mut self, step: Step<T>, cause: Cause) {
        let (next, schedule) = match step {
            Step::Unchanged => {
                trace!(policy = self.policy.name(), ?cause, "target unchanged");
                return;
            }
            Step::Settle(next) => (next, false),
            Step::Schedule(next) => (next, true),
        };

        self.cancel_pending();
        let previous = std::mem::replace(&mut self.state, next);
        self.revision += 1;

        debug!(
            policy = self.policy.name(),
            ?cause,
            from = %previous.phase(),
            to = %self.state.phase(),
            "transition state changed"
        );

        if schedule {
            let id = self.timer.schedule(self.delay);
            trace!(%id, delay_ms = self.delay.as_millis() as u64, "timer scheduled");
            self.pending = Some(id);
        }

        if let Some(history) = self.history.as_mut() {
            history.push(StateTransition {
                from: previous,
                to: self.state.clone(),
                cause,
                timestamp: Utc::now(),
            });
        }
    }
}

impl<T, P> Transitioned<T, P, ManualTimer>
where
    T: Clone,
    P: TransitionPolicy<T>,
{
    /// Move the virtual clock forward, firing every delay that falls due,
    /// including ones scheduled along the way. Returns how many fired.
    pub fn advance(&mut self, by: Duration) -> usize {
        let until = self.timer.now() + by;
        let mut fired = 0;
        while let Some(id) = self.timer.pop_due(until) {
            if self.fire(id) {
                fired += 1;
            }
        }
        self.timer.set_now(until);
        fired
    }

    /// Fire only the delays pending right now, not the ones they schedule.
    pub fn run_pending_timers(&mut self) -> usize {
        let due = self.timer.drain_pending();
        due.into_iter().filter(|id| self.fire(*id)).count()
    }
}

impl<T, P, Tm: Timer> Drop for Transitioned<T, P, Tm> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
