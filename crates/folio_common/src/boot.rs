//! Boot splash gate.
//!
//! One-shot delay between process start and the desktop appearing. The
//! splash text is rendered while the gate is closed; `poll` reports the
//! completion edge exactly once so the caller can run its boot-complete
//! hook without double firing.

use std::time::{Duration, Instant};

pub const SPLASH_TEXT: &str = "INITIALIZING PORTFOLIO.SYS...";

#[derive(Debug)]
pub struct BootGate {
    ready_at: Instant,
    fired: bool,
}

impl BootGate {
    pub fn new(now: Instant, delay: Duration) -> Self {
        Self {
            ready_at: now + delay,
            fired: false,
        }
    }

    /// A gate that is already open, for `--skip-boot`.
    pub fn completed(now: Instant) -> Self {
        Self {
            ready_at: now,
            fired: true,
        }
    }

    /// Returns `true` exactly once, on the first poll at or after the
    /// configured delay.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.fired || now < self.ready_at {
            return false;
        }
        self.fired = true;
        true
    }

    /// Whether the boot delay has elapsed (regardless of whether the
    /// completion edge was consumed).
    pub fn is_ready(&self, now: Instant) -> bool {
        self.fired || now >= self.ready_at
    }
}
