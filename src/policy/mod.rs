//! Transition policies: how a snapshot reacts to targets and elapsed delays.
//!
//! A policy is a pair of pure reducers. The machine owning the timer feeds
//! it the current snapshot and applies the returned [`Step`], which also
//! says what must happen to the pending timer.
//!
//! - [`Direct`]: A -> B in a single delay window
//! - [`Indirect`]: A -> null -> B, one delay window per leg

mod direct;
mod indirect;

pub use direct::Direct;
pub use indirect::Indirect;

use crate::core::{Equality, TransitionState};

/// Result of reducing a snapshot.
#[derive(Clone, Debug, PartialEq)]
pub enum Step<T> {
    /// Nothing changes. A pending timer keeps running.
    Unchanged,

    /// Move to this snapshot with no timer pending.
    Settle(TransitionState<T>),

    /// Move to this snapshot and (re)arm the timer for one delay.
    Schedule(TransitionState<T>),
}

impl<T> Step<T> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// The snapshot to move to, if any.
    pub fn state(&self) -> Option<&TransitionState<T>> {
        match self {
            Self::Unchanged => None,
            Self::Settle(state) | Self::Schedule(state) => Some(state),
        }
    }
}

/// Pure reducer pair driving a transitioned value.
pub trait TransitionPolicy<T> {
    /// Name for diagnostics.
    fn name(&self) -> &'static str;

    /// React to a new target value.
    fn receive(
        &self,
        state: &TransitionState<T>,
        target: Option<T>,
        equality: &Equality<T>,
    ) -> Step<T>;

    /// React to the pending delay elapsing.
    fn elapse(&self, state: &TransitionState<T>) -> Step<T>;
}
