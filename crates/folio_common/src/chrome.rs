//! Window title bar with the two-stage flicker relabel.
//!
//! A title change does not swap instantly: the old title holds while
//! the bar "flickers", the swap lands after the dim delay, and the
//! flicker visual clears after a further settle delay. Both deadlines
//! live inside the struct, so tearing the chrome down cancels them.

use std::time::{Duration, Instant};

#[derive(Debug)]
enum Phase {
    Steady,
    /// Old title still showing; swap lands at `swap_at`.
    Dimming {
        swap_at: Instant,
        pending: String,
    },
    /// New title showing; flicker visual clears at `settle_at`.
    Settling { settle_at: Instant },
}

#[derive(Debug)]
pub struct TitleBar {
    shown: String,
    phase: Phase,
    dim: Duration,
    settle: Duration,
}

impl TitleBar {
    pub fn new(initial: impl Into<String>, dim: Duration, settle: Duration) -> Self {
        Self {
            shown: initial.into(),
            phase: Phase::Steady,
            dim,
            settle,
        }
    }

    /// The title currently on screen.
    pub fn title(&self) -> &str {
        &self.shown
    }

    pub fn is_flickering(&self) -> bool {
        !matches!(self.phase, Phase::Steady)
    }

    /// Begin relabeling toward `title`.
    ///
    /// Idempotent for the title already shown or already pending. A
    /// retarget mid-flicker restarts the sequence toward the newest
    /// title, matching a timer that is cleared and re-armed.
    pub fn retarget(&mut self, title: &str, now: Instant) {
        match &self.phase {
            Phase::Steady if title == self.shown => return,
            Phase::Dimming { pending, .. } if pending == title => return,
            Phase::Settling { .. } if title == self.shown => return,
            _ => {}
        }

        self.phase = Phase::Dimming {
            swap_at: now + self.dim,
            pending: title.to_string(),
        };
    }

    /// Advance the flicker phases.
    pub fn tick(&mut self, now: Instant) {
        // Both edges can pass in a single coarse tick.
        if let Phase::Dimming { swap_at, pending } = &self.phase {
            if now >= *swap_at {
                let settle_at = *swap_at + self.settle;
                self.shown = pending.clone();
                self.phase = Phase::Settling { settle_at };
            }
        }
        if let Phase::Settling { settle_at } = &self.phase {
            if now >= *settle_at {
                self.phase = Phase::Steady;
            }
        }
    }
}
