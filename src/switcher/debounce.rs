//! Session-scoped debounce timer
//!
//! Holds at most one pending value with a deadline. Scheduling replaces the
//! pending value and restarts the window; the owner polls with the current
//! time from its event loop.

use std::time::{Duration, Instant};

/// Default delay between the last keystroke and the highlight update
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(150);

#[derive(Debug)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancel any pending value and schedule `value` for `now + delay`
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
        });
    }

    /// Drop the pending value. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// Take the pending value once its deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if pending.deadline <= now => {
                self.pending.take().map(|pending| pending.value)
            }
            _ => None,
        }
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_value_released_after_delay() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(150 * MS);
        debouncer.schedule("pods", start);

        assert_eq!(debouncer.poll(start + 149 * MS), None);
        assert_eq!(debouncer.poll(start + 150 * MS), Some("pods"));
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(start + 300 * MS), None);
    }

    #[test]
    fn test_reschedule_restarts_window() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(150 * MS);
        debouncer.schedule("p", start);
        debouncer.schedule("po", start + 100 * MS);

        assert_eq!(debouncer.poll(start + 200 * MS), None);
        assert_eq!(debouncer.deadline(), Some(start + 250 * MS));
        assert_eq!(debouncer.poll(start + 250 * MS), Some("po"));
    }

    #[test]
    fn test_cancel_discards_pending_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(150 * MS);
        debouncer.schedule("pods", start);

        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());
        assert_eq!(debouncer.poll(start + 500 * MS), None);
    }

    #[test]
    fn test_default_delay() {
        let debouncer: Debouncer<String> = Debouncer::default();
        assert_eq!(debouncer.delay(), Duration::from_millis(150));
        assert_eq!(debouncer.deadline(), None);
    }
}
