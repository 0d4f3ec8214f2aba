//! Transition history tracking.
//!
//! Records every applied state change of a transitioned value, following the
//! same immutable style as the snapshots themselves.

use super::state::{Phase, TransitionState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What caused a recorded change.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Cause {
    /// A new target value was received.
    Target,
    /// The pending delay elapsed.
    Elapsed,
}

/// Record of a single applied state change.
///
/// # Example
///
/// ```rust
/// use transitioned::core::{Cause, Phase, StateTransition, TransitionState};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: TransitionState::idle(Some("a")),
///     to: TransitionState::direct(Some("a"), Some("b")),
///     cause: Cause::Target,
///     timestamp: Utc::now(),
/// };
///
/// assert_eq!(transition.phases(), (Phase::Idle, Phase::Transitioning));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateTransition<T> {
    /// Snapshot before the change
    pub from: TransitionState<T>,
    /// Snapshot after the change
    pub to: TransitionState<T>,
    pub cause: Cause,
    /// When the change was applied
    pub timestamp: DateTime<Utc>,
}

impl<T> StateTransition<T> {
    pub fn phases(&self) -> (Phase, Phase) {
        (self.from.phase(), self.to.phase())
    }
}

/// Ordered history of applied state changes.
///
/// `record` consumes the history and returns it with the change appended.
/// A history built with [`bounded`](Self::bounded) keeps only the most recent
/// changes.
///
/// # Example
///
/// ```rust
/// use transitioned::core::{Cause, StateHistory, StateTransition, TransitionState};
/// use chrono::Utc;
///
/// let history = StateHistory::new();
///
/// let history = history.record(StateTransition {
///     from: TransitionState::idle(Some(1)),
///     to: TransitionState::direct(Some(1), Some(2)),
///     cause: Cause::Target,
///     timestamp: Utc::now(),
/// });
///
/// let history = history.record(StateTransition {
///     from: TransitionState::direct(Some(1), Some(2)),
///     to: TransitionState::idle(Some(2)),
///     cause: Cause::Elapsed,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path[2].next, Some(2));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory<T> {
    transitions: Vec<StateTransition<T>>,
    #[serde(default)]
    capacity: Option<usize>,
}

impl<T> Default for StateHistory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StateHistory<T> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            capacity: None,
        }
    }

    /// History keeping at most `capacity` changes, dropping the oldest first.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            transitions: Vec::new(),
            capacity: Some(capacity),
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Record a change, returning the extended history.
    pub fn record(mut self, transition: StateTransition<T>) -> Self {
        self.push(transition);
        self
    }

    /// Append a change in place.
    pub fn push(&mut self, transition: StateTransition<T>) {
        self.transitions.push(transition);
        if let Some(capacity) = self.capacity {
            let excess = self.transitions.len().saturating_sub(capacity);
            self.transitions.drain(..excess);
        }
    }

    /// Get the snapshots traversed: the first `from`, then each `to`.
    pub fn get_path(&self) -> Vec<&TransitionState<T>> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded change.
    ///
    /// Returns `None` if nothing was recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> &[StateTransition<T>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
