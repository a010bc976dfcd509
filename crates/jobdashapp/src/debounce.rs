//! Debounce/coalesce utility.
//!
//! Rapid edits are coalesced: each [`dispatch`](Debouncer::dispatch) replaces
//! the pending value and restarts the window, and only the latest value is
//! released once the window has passed without a new dispatch. A released
//! value equal to the previously released one (by the configured equality
//! function) is swallowed so that identical content is not written twice.
//!
//! Time is passed in explicitly, which keeps the debouncer independent of any
//! event loop and deterministic under test.

use std::time::{Duration, Instant};

pub const DEFAULT_WINDOW: Duration = Duration::from_millis(500);

pub struct Debouncer<V, F = fn(&V, &V) -> bool> {
    window: Duration,
    same: F,
    pending: Option<(V, Instant)>,
    last_released: Option<V>,
}

impl<V: PartialEq + Clone> Debouncer<V> {
    /// Debouncer comparing values with `PartialEq`.
    pub fn new(window: Duration) -> Self {
        Debouncer::with_equality(window, <V as PartialEq>::eq as fn(&V, &V) -> bool)
    }
}

impl<V, F> Debouncer<V, F>
where
    V: Clone,
    F: Fn(&V, &V) -> bool,
{
    pub fn with_equality(window: Duration, same: F) -> Self {
        Self {
            window,
            same,
            pending: None,
            last_released: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Queue `value`, replacing anything pending and restarting the window.
    pub fn dispatch(&mut self, value: V, now: Instant) {
        self.pending = Some((value, now + self.window));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value becomes due.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, due)| *due)
    }

    /// Release the pending value if its window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<V> {
        match self.deadline() {
            Some(due) if now >= due => self.flush(),
            _ => None,
        }
    }

    /// Release the pending value immediately.
    pub fn flush(&mut self) -> Option<V> {
        let (value, _) = self.pending.take()?;
        if let Some(last) = &self.last_released {
            if (self.same)(last, &value) {
                return None;
            }
        }
        self.last_released = Some(value.clone());
        Some(value)
    }

    /// Drop the pending value without releasing it.
    pub fn cancel(&mut self) -> Option<V> {
        self.pending.take().map(|(value, _)| value)
    }

    /// Forget the last released value, so the next equal value is released again.
    pub fn reset(&mut self) {
        self.pending = None;
        self.last_released = None;
    }
}
