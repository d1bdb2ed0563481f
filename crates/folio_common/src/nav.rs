//! Screen navigation state machine.
//!
//! Tracks which screen is visible and whether a transition animation is
//! in flight. All time handling goes through explicit [`Instant`]s so
//! the event loop owns the clock and tests can drive it directly. The
//! pending transition-clear "timer" is just a deadline field: dropping
//! the machine drops the timer with it, so no callback can ever fire
//! against torn-down state.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::catalog::{self, ScreenId};

/// Which way the exit/enter animation slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug)]
pub struct ScreenNav {
    current: ScreenId,
    transitioning: bool,
    direction: Direction,
    /// Deadline at which the in-flight transition resolves.
    clears_at: Option<Instant>,
    duration: Duration,
}

impl ScreenNav {
    pub fn new(initial: ScreenId, duration: Duration) -> Self {
        Self {
            current: initial,
            transitioning: false,
            direction: Direction::Forward,
            clears_at: None,
            duration,
        }
    }

    pub fn current(&self) -> ScreenId {
        self.current
    }

    pub fn index(&self) -> usize {
        self.current.index()
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Request a jump to `target`.
    ///
    /// Returns `true` if the navigation was accepted. Requests that
    /// arrive mid-transition are dropped, not queued, and a request for
    /// the current screen is a no-op. The screen identifier changes
    /// immediately; only the transitioning flag waits for the deadline.
    pub fn go_to(&mut self, target: ScreenId, now: Instant) -> bool {
        if self.transitioning || target == self.current {
            if self.transitioning {
                debug!(target = target.as_str(), "navigation dropped mid-transition");
            }
            return false;
        }

        self.direction = if target.index() > self.current.index() {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.transitioning = true;
        self.current = target;
        self.clears_at = Some(now + self.duration);
        true
    }

    /// Step forward in navigation order. No wraparound: at the last
    /// screen this is a no-op.
    pub fn go_next(&mut self, now: Instant) -> bool {
        match ScreenId::from_index(self.current.index() + 1) {
            Some(next) => self.go_to(next, now),
            None => false,
        }
    }

    /// Step backward in navigation order. No wraparound at index 0.
    pub fn go_previous(&mut self, now: Instant) -> bool {
        let index = self.current.index();
        if index == 0 {
            return false;
        }
        match ScreenId::from_index(index - 1) {
            Some(previous) => self.go_to(previous, now),
            None => false,
        }
    }

    /// Resolve the pending transition once its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.clears_at {
            if now >= deadline {
                self.transitioning = false;
                self.clears_at = None;
            }
        }
    }

    /// Title shown in the window chrome for the current screen.
    ///
    /// The fallback is defensive; catalog validation makes a missing
    /// descriptor unreachable in practice.
    pub fn window_title(&self) -> &'static str {
        catalog::descriptor(self.current)
            .map(|s| s.window_title)
            .unwrap_or("PORTFOLIO.EXE")
    }
}
