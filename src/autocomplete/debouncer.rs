//! Lookup debouncer
//!
//! Holds a single deadline. Every keystroke pushes the deadline out; the
//! event loop polls `should_fire()` on each tick. Nothing ever sleeps.

use std::time::{Duration, Instant};

/// Default delay between the last keystroke and the lookup
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(debounce_ms),
            deadline: None,
        }
    }

    /// Schedule (or reschedule) a lookup relative to `now`
    pub fn schedule_execution(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop any scheduled lookup
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn has_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true once when the deadline has passed, then disarms
    pub fn should_fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
