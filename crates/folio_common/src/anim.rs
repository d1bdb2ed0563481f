//! Entrance animation variants.
//!
//! A declarative table of motion parameters, named after the variants
//! the screens share: a stagger container plus fade/timeline/dot/row
//! children. Each variant turns "time since the screen appeared" into a
//! 0..=1 progress value; the renderer maps progress to hidden, dimmed,
//! or fully shown.

use std::time::Duration;

/// One named set of motion parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionVariant {
    pub name: &'static str,
    /// Delay before the first child starts.
    pub delay: Duration,
    /// Time a single element takes to reach full visibility.
    pub duration: Duration,
    /// Additional per-child delay for staggered reveals.
    pub stagger: Duration,
}

/// Parent container: children start after 100ms, 100ms apart.
pub const STAGGER_CONTAINER: MotionVariant = MotionVariant {
    name: "stagger_container",
    delay: Duration::from_millis(100),
    duration: Duration::from_millis(300),
    stagger: Duration::from_millis(100),
};

/// Standard fade-and-rise for text blocks and cards.
pub const FADE_SLIDE_UP: MotionVariant = MotionVariant {
    name: "fade_slide_up",
    delay: Duration::ZERO,
    duration: Duration::from_millis(300),
    stagger: Duration::ZERO,
};

/// The vertical timeline rule on the experience screen.
pub const TIMELINE: MotionVariant = MotionVariant {
    name: "timeline",
    delay: Duration::from_millis(200),
    duration: Duration::from_millis(600),
    stagger: Duration::ZERO,
};

/// Timeline dots pop in with the cards.
pub const DOT: MotionVariant = MotionVariant {
    name: "dot",
    delay: Duration::ZERO,
    duration: Duration::from_millis(300),
    stagger: Duration::ZERO,
};

/// Project grid rows fade as a unit.
pub const ROW: MotionVariant = MotionVariant {
    name: "row",
    delay: Duration::ZERO,
    duration: Duration::from_millis(300),
    stagger: Duration::ZERO,
};

impl MotionVariant {
    /// Progress of child `index` at `elapsed`, clamped to [0, 1].
    pub fn progress(&self, elapsed: Duration, index: usize) -> f32 {
        let start = self.delay + self.stagger * index as u32;
        if elapsed <= start {
            return 0.0;
        }
        let running = elapsed - start;
        if running >= self.duration {
            return 1.0;
        }
        running.as_secs_f32() / self.duration.as_secs_f32()
    }

    /// Whether child `index` has started appearing at all.
    pub fn started(&self, elapsed: Duration, index: usize) -> bool {
        self.progress(elapsed, index) > 0.0
    }

    /// Whether child `index` is fully shown.
    pub fn settled(&self, elapsed: Duration, index: usize) -> bool {
        (self.progress(elapsed, index) - 1.0).abs() < f32::EPSILON
    }
}

/// Render state for a staggered child, ready for the style mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    Hidden,
    Entering,
    Shown,
}

/// Reveal state of child `index` under [`STAGGER_CONTAINER`].
pub fn stagger_reveal(elapsed: Duration, index: usize) -> Reveal {
    let progress = STAGGER_CONTAINER.progress(elapsed, index);
    if progress <= 0.0 {
        Reveal::Hidden
    } else if progress < 1.0 {
        Reveal::Entering
    } else {
        Reveal::Shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_zero_before_the_delay() {
        assert_eq!(FADE_SLIDE_UP.progress(Duration::ZERO, 0), 0.0);
        assert_eq!(TIMELINE.progress(Duration::from_millis(200), 0), 0.0);
    }

    #[test]
    fn progress_reaches_one_after_duration() {
        assert_eq!(FADE_SLIDE_UP.progress(Duration::from_millis(300), 0), 1.0);
        assert_eq!(TIMELINE.progress(Duration::from_millis(800), 0), 1.0);
        // And stays there.
        assert_eq!(FADE_SLIDE_UP.progress(Duration::from_secs(5), 0), 1.0);
    }

    #[test]
    fn progress_is_monotonic_mid_flight() {
        let early = FADE_SLIDE_UP.progress(Duration::from_millis(100), 0);
        let late = FADE_SLIDE_UP.progress(Duration::from_millis(200), 0);
        assert!(early > 0.0 && early < 1.0);
        assert!(late > early && late < 1.0);
    }

    #[test]
    fn stagger_offsets_children_by_100ms() {
        // Child 0 starts at 100ms, child 3 at 400ms.
        assert!(STAGGER_CONTAINER.started(Duration::from_millis(150), 0));
        assert!(!STAGGER_CONTAINER.started(Duration::from_millis(150), 1));
        assert!(!STAGGER_CONTAINER.started(Duration::from_millis(400), 3));
        assert!(STAGGER_CONTAINER.started(Duration::from_millis(450), 3));
    }

    #[test]
    fn stagger_reveal_maps_to_three_states() {
        assert_eq!(stagger_reveal(Duration::ZERO, 0), Reveal::Hidden);
        assert_eq!(stagger_reveal(Duration::from_millis(250), 0), Reveal::Entering);
        assert_eq!(stagger_reveal(Duration::from_millis(400), 0), Reveal::Shown);
        // Later children lag behind.
        assert_eq!(stagger_reveal(Duration::from_millis(400), 4), Reveal::Hidden);
    }

    #[test]
    fn settled_after_full_run() {
        assert!(FADE_SLIDE_UP.settled(Duration::from_millis(300), 0));
        assert!(!FADE_SLIDE_UP.settled(Duration::from_millis(299), 0));
    }
}
