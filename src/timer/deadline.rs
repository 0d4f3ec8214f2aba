use super::{Timer, TimerId};
use std::time::Duration;
use tokio::time::Instant;

/// Single-slot timer on the tokio clock.
///
/// It only remembers the most recent deadline; the async driver sleeps until
/// it and delivers the id back to the machine. Scheduling replaces any
/// previous deadline, matching the one-pending-timer rule of its owner.
#[derive(Debug, Default)]
pub struct DeadlineTimer {
    next_id: u64,
    armed: Option<(TimerId, Instant)>,
}

impl DeadlineTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The armed id and when it expires.
    pub fn deadline(&self) -> Option<(TimerId, Instant)> {
        self.armed
    }
}

impl Timer for DeadlineTimer {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId::new(self.next_id);
        self.armed = Some((id, Instant::now() + delay));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if self.armed.is_some_and(|(armed, _)| armed == id) {
            self.armed = None;
        }
    }
}
