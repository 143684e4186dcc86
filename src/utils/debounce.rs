//! Rescan debouncing
//!
//! Text-change rescans are coalesced so that only the scan scheduled after
//! the last edit in a burst actually runs. The host owns the timer; this is
//! the timer-free scheduling core: each edit moves the single pending
//! deadline (cancel-and-reschedule), and `poll` fires at most once per burst
//! after the window elapses. Last edit wins, single trailing execution.

use std::time::{Duration, Instant};

/// Delay between the last edit and the rescan it schedules.
pub const DEFAULT_RESCAN_DELAY: Duration = Duration::from_millis(500);

/// Trailing-edge debouncer.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Record an edit: any pending rescan is rescheduled to `now + window`.
    pub fn note_edit(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// True exactly once per edit burst, after the window has elapsed with
    /// no further edits.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Whether a rescan is currently scheduled.
    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Drop any scheduled rescan.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_RESCAN_DELAY)
    }
}
