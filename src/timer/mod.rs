//! Delayed-callback primitives.
//!
//! A [`Timer`] hands out a [`TimerId`] for every scheduled delay. The host
//! that owns the timer delivers expirations back to the machine by id, and
//! the machine ignores any id that is no longer its pending one. Cancelling
//! is always idempotent.

mod deadline;
mod manual;

pub use deadline::DeadlineTimer;
pub use manual::ManualTimer;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Handle identifying one scheduled delay.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct TimerId(u64);

impl TimerId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Schedule-and-cancel primitive owned by a single machine.
pub trait Timer {
    /// Arm a delay, returning its handle.
    fn schedule(&mut self, delay: Duration) -> TimerId;

    /// Disarm a delay. Unknown, fired or already cancelled ids are a no-op.
    fn cancel(&mut self, id: TimerId);
}

impl<Tm: Timer + ?Sized> Timer for Box<Tm> {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        (**self).schedule(delay)
    }

    fn cancel(&mut self, id: TimerId) {
        (**self).cancel(id)
    }
}
