//! Trailing-edge debounce for commit notifications.

use std::time::{Duration, Instant};

/// Quiescent window applied to commit notifications before the external
/// listener is invoked.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

/// A trailing-edge debouncer: scheduling replaces any pending value and
/// restarts the delay, so only the most recent value ever fires, and only
/// once the stream of schedules has gone quiet.
///
/// Time is injected by the caller. The host pumps [`poll`](Self::poll) from
/// its event loop with the current instant; there is no internal timer
/// thread, matching the single-threaded cooperative model of the widget.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug)]
struct Pending<T> {
    value: T,
    due: Instant,
}

impl<T> Debouncer<T> {
    /// Creates a debouncer with the provided quiescent window.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedules `value` to fire once `delay` elapses, replacing and
    /// re-timing any value already pending.
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            due: now + self.delay,
        });
    }

    /// Takes the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.pending.as_ref().is_some_and(|p| now >= p.due) {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    /// Drops any pending value without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Returns `true` while a value is waiting for its deadline.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The configured quiescent window.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}
