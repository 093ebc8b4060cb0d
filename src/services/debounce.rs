//! Trailing-edge debouncer.
//!
//! Coalesces rapid calls within a quiet window and keeps only the last value.
//! The debouncer owns no timer: callers feed it instants (`push_at`,
//! `poll_at`) so it works under a timer loop, a scheduled task, or a
//! synchronous test. A zero window makes every push ready immediately.

use std::time::{Duration, Instant};

/// Default quiet window for search input.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Holds the latest pushed value until the window has passed without a new push.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<T>,
    last_push: Option<Instant>,
    coalesced: u64,
}

impl<T> Debouncer<T> {
    /// Creates a debouncer with the given quiet window.
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
            last_push: None,
            coalesced: 0,
        }
    }

    /// Returns the quiet window.
    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Pushes a value now.
    pub fn push(&mut self, value: T) {
        self.push_at(value, Instant::now());
    }

    /// Pushes a value at `now`, replacing any pending value and restarting the window.
    pub fn push_at(&mut self, value: T, now: Instant) {
        if self.pending.replace(value).is_some() {
            self.coalesced += 1;
        }
        self.last_push = Some(now);
    }

    /// Returns the pending value if the window has elapsed.
    pub fn poll(&mut self) -> Option<T> {
        self.poll_at(Instant::now())
    }

    /// Returns the pending value if the window has elapsed at `now`.
    pub fn poll_at(&mut self, now: Instant) -> Option<T> {
        if self.time_until_ready(now)? > Duration::ZERO {
            return None;
        }
        self.flush()
    }

    /// Returns the pending value regardless of the window.
    pub fn flush(&mut self) -> Option<T> {
        self.last_push = None;
        self.pending.take()
    }

    /// Drops the pending value, if any.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.last_push = None;
    }

    /// Time left before the pending value becomes ready, or `None` if nothing is pending.
    #[must_use]
    pub fn time_until_ready(&self, now: Instant) -> Option<Duration> {
        self.pending.as_ref()?;
        let since = now.saturating_duration_since(self.last_push?);
        Some(self.window.saturating_sub(since))
    }

    /// Returns true if a value is waiting.
    #[must_use]
    pub const fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Number of values replaced before they became ready.
    #[must_use]
    pub const fn coalesced_count(&self) -> u64 {
        self.coalesced
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
