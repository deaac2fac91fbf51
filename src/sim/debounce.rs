//! Debounce flag
//!
//! A dismissal click can reach the canvas as well as the shape it hit.
//! Arming the flag on dismissal keeps that same gesture from spawning.

use std::time::{Duration, Instant};

/// A boolean with a scheduled reset
///
/// Time is passed in by the caller, so behavior is deterministic under test.
#[derive(Clone, Debug)]
pub struct Debounce {
    window: Duration,
    active: bool,
    reset_at: Option<Instant>,
}

impl Debounce {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            active: false,
            reset_at: None,
        }
    }

    /// Raise the flag until `now + window`
    pub fn arm(&mut self, now: Instant) {
        self.active = true;
        self.reset_at = Some(now + self.window);
    }

    /// Apply a due reset
    pub fn poll(&mut self, now: Instant) {
        if let Some(reset_at) = self.reset_at {
            if now >= reset_at {
                self.active = false;
                self.reset_at = None;
            }
        }
    }

    /// Whether spawn-on-click is currently suppressed
    pub fn is_active(&mut self, now: Instant) -> bool {
        self.poll(now);
        self.active
    }
}
