//! Debounce timer
//!
//! Holds at most one pending timer. Scheduling a new one cancels the
//! previous one, so a burst of edits produces a single firing carrying the
//! last scheduled payload. The timer is polled from the event loop with an
//! explicit `now`, which keeps it deterministic under test.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Handle to a scheduled timer
///
/// `cancel()` is idempotent and harmless after the timer has fired.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    cancelled: Rc<Cell<bool>>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

#[derive(Debug)]
struct PendingTimer<T> {
    deadline: Instant,
    payload: T,
    handle: CancelHandle,
}

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<PendingTimer<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            pending: None,
        }
    }

    /// Start the timer, replacing any pending one
    pub fn schedule_after(&mut self, now: Instant, payload: T) -> CancelHandle {
        self.cancel();
        let handle = CancelHandle::default();
        self.pending = Some(PendingTimer {
            deadline: now + self.delay,
            payload,
            handle: handle.clone(),
        });
        handle
    }

    /// Drop the pending timer; it will never fire
    pub fn cancel(&mut self) {
        if let Some(timer) = self.pending.take() {
            timer.handle.cancel();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|timer| !timer.handle.is_cancelled())
    }

    /// Fire the timer if its deadline has passed, yielding its payload once
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let timer = self.pending.take()?;
        if timer.handle.is_cancelled() {
            return None;
        }
        if now < timer.deadline {
            self.pending = Some(timer);
            return None;
        }
        // Mark fired so a late cancel() through the handle is a no-op
        timer.handle.cancel();
        Some(timer.payload)
    }

    /// Time left before the pending timer fires, for sizing event-loop waits
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .filter(|timer| !timer.handle.is_cancelled())
            .map(|timer| timer.deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
