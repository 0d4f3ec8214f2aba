//! The transition snapshot handed to render callbacks.
//!
//! A `TransitionState` is an immutable value describing where a single
//! transitioned prop currently stands: what is arriving, what is leaving,
//! and whether the delay window is still open.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of a transitioned value.
///
/// Only `transition`, `next` and `previous` are meant for render callbacks.
/// The indirect bookkeeping is kept private and exposed read-only for hosts
/// that need to inspect the queued leg.
///
/// # Example
///
/// ```rust
/// use transitioned::core::{Phase, TransitionState};
///
/// let state = TransitionState::idle(Some("a"));
///
/// assert!(!state.transition);
/// assert_eq!(state.next, Some("a"));
/// assert_eq!(state.previous, None);
/// assert_eq!(state.phase(), Phase::Idle);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TransitionState<T> {
    /// True while a transition is in progress.
    pub transition: bool,
    /// The value arriving.
    pub next: Option<T>,
    /// The value leaving. `None` outside a transition.
    pub previous: Option<T>,
    #[serde(default)]
    pub(crate) transition_indirect: bool,
    pub(crate) indirect_next: Option<T>,
}

impl<T> TransitionState<T> {
    /// Steady state resting on `next`.
    pub fn idle(next: Option<T>) -> Self {
        Self {
            transition: false,
            next,
            previous: None,
            transition_indirect: false,
            indirect_next: None,
        }
    }

    /// A direct transition from `previous` to `next`.
    pub fn direct(previous: Option<T>, next: Option<T>) -> Self {
        Self {
            transition: true,
            next,
            previous,
            transition_indirect: false,
            indirect_next: None,
        }
    }

    /// First leg of an indirect transition: `previous` fades to nothing while
    /// `target` waits for the second leg.
    pub fn to_null(previous: Option<T>, target: Option<T>) -> Self {
        Self {
            transition: true,
            next: None,
            previous,
            transition_indirect: true,
            indirect_next: target,
        }
    }

    /// True while routing through the intermediate null leg.
    pub fn is_indirect(&self) -> bool {
        self.transition_indirect
    }

    /// The target queued behind the null leg, if any.
    pub fn indirect_next(&self) -> Option<&T> {
        self.indirect_next.as_ref()
    }

    pub fn is_settled(&self) -> bool {
        !self.transition
    }

    /// Classify the snapshot.
    ///
    /// `FromNull` is a direct transition that started from `None`, which is
    /// also what the second leg of an indirect transition looks like.
    pub fn phase(&self) -> Phase {
        if !self.transition {
            Phase::Idle
        } else if self.transition_indirect {
            Phase::ToNull
        } else if self.previous.is_none() && self.next.is_some() {
            Phase::FromNull
        } else {
            Phase::Transitioning
        }
    }
}

/// Coarse position of a snapshot within a transition.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No transition in progress.
    Idle,
    /// Direct transition between `previous` and `next`.
    Transitioning,
    /// Leaving `previous` towards the null placeholder.
    ToNull,
    /// Arriving at `next` from nothing.
    FromNull,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Transitioning => "Transitioning",
            Self::ToNull => "ToNull",
            Self::FromNull => "FromNull",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
