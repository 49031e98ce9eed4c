//! Auto-hide timer for the control overlay.
//!
//! A single owned deadline. Arming replaces any previous deadline, so at
//! most one hide is ever pending.

use std::time::{Duration, Instant};

/// One-shot, re-armable timer.
#[derive(Debug, Clone)]
pub struct ControlsTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl ControlsTimer {
    /// Default inactivity period before controls hide.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(3000);

    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Clear any pending deadline and start a new one from `now`.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true exactly once when the deadline has passed, disarming.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for ControlsTimer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}
