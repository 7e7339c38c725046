//! Cancellable one-shot timers driven by elapsed frame time.
//!
//! Timers never read a clock. The owner advances them with the time that
//! passed since the last frame, which keeps widget logic deterministic and
//! lets tests step time explicitly.

use std::time::Duration;

/// A one-shot timer. Scheduling while pending restarts the countdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    remaining: Option<Duration>,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the countdown.
    pub fn schedule(&mut self, delay: Duration) {
        self.remaining = Some(delay);
    }

    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    pub fn remaining(&self) -> Option<Duration> {
        self.remaining
    }

    /// Let `elapsed` pass. Returns `true` exactly once, on the call during
    /// which the countdown reaches zero.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        match self.remaining {
            Some(left) if elapsed >= left => {
                self.remaining = None;
                true
            }
            Some(left) => {
                self.remaining = Some(left - elapsed);
                false
            }
            None => false,
        }
    }
}
