use super::{Timer, TimerId};
use std::collections::BTreeMap;
use std::time::Duration;

/// Timer on a virtual clock that only moves when told to.
///
/// Useful for hosts that drive time themselves (frame loops, tests). Only
/// a count of scheduled delays is kept; a timer made with
/// [`recording`](Self::recording) also keeps every requested delay so tests
/// can assert on what was scheduled.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use transitioned::timer::{ManualTimer, Timer};
///
/// let mut timer = ManualTimer::new();
/// let id = timer.schedule(Duration::from_millis(500));
///
/// assert_eq!(timer.pop_due(Duration::from_millis(499)), None);
/// assert_eq!(timer.pop_due(Duration::from_millis(500)), Some(id));
/// assert_eq!(timer.now(), Duration::from_millis(500));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualTimer {
    now: Duration,
    next_id: u64,
    pending: BTreeMap<TimerId, Duration>,
    scheduled: usize,
    recorded: Option<Vec<Duration>>,
    cancelled: usize,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timer that remembers every delay passed to `schedule`.
    pub fn recording() -> Self {
        Self {
            recorded: Some(Vec::new()),
            ..Self::default()
        }
    }

    /// Current virtual time since construction.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Every delay scheduled so far, in order. Empty unless recording.
    pub fn scheduled(&self) -> &[Duration] {
        self.recorded.as_deref().unwrap_or_default()
    }

    /// Number of delays scheduled so far.
    pub fn scheduled_count(&self) -> usize {
        self.scheduled
    }

    /// Number of effective cancellations of a pending delay.
    pub fn cancelled(&self) -> usize {
        self.cancelled
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.contains_key(&id)
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.values().min().copied()
    }

    /// Remove the earliest timer due at or before `until`, moving the clock
    /// to its deadline.
    ///
    /// Ties fire in scheduling order.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerId> {
        let (id, deadline) = self
            .pending
            .iter()
            .filter(|(_, deadline)| **deadline <= until)
            .min_by_key(|(id, deadline)| (**deadline, **id))
            .map(|(id, deadline)| (*id, *deadline))?;

        self.pending.remove(&id);
        self.now = self.now.max(deadline);
        Some(id)
    }

    /// Remove every currently pending timer, earliest first, moving the
    /// clock to the latest of their deadlines.
    pub fn drain_pending(&mut self) -> Vec<TimerId> {
        let mut due: Vec<(TimerId, Duration)> =
            std::mem::take(&mut self.pending).into_iter().collect();
        due.sort_by_key(|(id, deadline)| (*deadline, *id));

        if let Some((_, latest)) = due.last() {
            self.now = self.now.max(*latest);
        }
        due.into_iter().map(|(id, _)| id).collect()
    }

    /// Move the clock forward without firing anything.
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }
}

impl Timer for ManualTimer {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId::new(self.next_id);
        self.pending.insert(id, self.now + delay);
        self.scheduled += 1;
        if let Some(recorded) = self.recorded.as_mut() {
            recorded.push(delay);
        }
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if self.pending.remove(&id).is_some() {
            self.cancelled += 1;
        }
    }
}
