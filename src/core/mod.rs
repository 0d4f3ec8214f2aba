//! Core transition types.
//!
//! This module contains the pure values the state machine works with:
//! - `TransitionState` snapshots and their `Phase`
//! - The `Equality` policy deciding whether a target is new
//! - Immutable history of applied changes
//!
//! Nothing in here schedules timers or mutates shared state.

mod equality;
mod history;
mod state;

pub use equality::Equality;
pub use history::{Cause, StateHistory, StateTransition};
pub use state::{Phase, TransitionState};
