//! Composition root state.
//!
//! One `App` owns every piece of UI state: the boot gate, the
//! navigation machine, the window chrome, and the toast store. The
//! event loop calls [`App::tick`] once per frame with the current
//! instant; all timer resolution happens there, synchronously, so state
//! never changes between a tick and the draw that follows it.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use folio_common::boot::BootGate;
use folio_common::catalog::ScreenId;
use folio_common::chrome::TitleBar;
use folio_common::clock;
use folio_common::config::FolioConfig;
use folio_common::nav::ScreenNav;
use folio_common::toast::ToastStore;

pub struct App {
    pub config: FolioConfig,
    pub nav: ScreenNav,
    pub chrome: TitleBar,
    pub toasts: ToastStore,
    pub clock: String,
    pub scroll: u16,
    pub show_help: bool,
    pub booted: bool,
    pub should_quit: bool,
    boot: BootGate,
    /// Start of the current screen's entrance animation.
    anim_epoch: Instant,
    last_clock_sample: Instant,
}

impl App {
    pub fn new(config: FolioConfig, skip_boot: bool, now: Instant) -> Self {
        let nav = ScreenNav::new(config.start_screen, config.transition());
        let chrome = TitleBar::new(
            nav.window_title(),
            config.title_dim(),
            config.title_settle(),
        );
        let boot = if skip_boot {
            BootGate::completed(now)
        } else {
            BootGate::new(now, config.boot_delay())
        };
        let toasts = ToastStore::new(config.toast_ttl());

        Self {
            nav,
            chrome,
            toasts,
            clock: clock::sample_clock(),
            scroll: 0,
            show_help: false,
            booted: skip_boot,
            should_quit: false,
            boot,
            anim_epoch: now,
            last_clock_sample: now,
            config,
        }
    }

    /// Advance every timer. Called once per frame before drawing.
    pub fn tick(&mut self, now: Instant) {
        if !self.booted && self.boot.poll(now) {
            self.booted = true;
            self.anim_epoch = now;
            info!("boot sequence complete");
        }

        self.nav.tick(now);

        // The chrome follows the navigation machine's title; retarget is
        // idempotent so calling it every frame only arms on a change.
        self.chrome.retarget(self.nav.window_title(), now);
        self.chrome.tick(now);

        self.toasts.tick(now);

        if now.duration_since(self.last_clock_sample) >= self.config.clock_tick() {
            self.clock = clock::sample_clock();
            self.last_clock_sample = now;
        }
    }

    /// Time since the current screen started entering.
    pub fn anim_elapsed(&self, now: Instant) -> Duration {
        now.duration_since(self.anim_epoch)
    }

    pub fn navigate(&mut self, target: ScreenId, now: Instant) {
        if self.nav.go_to(target, now) {
            self.on_screen_changed(now);
        }
    }

    pub fn navigate_next(&mut self, now: Instant) {
        if self.nav.go_next(now) {
            self.on_screen_changed(now);
        }
    }

    pub fn navigate_previous(&mut self, now: Instant) {
        if self.nav.go_previous(now) {
            self.on_screen_changed(now);
        }
    }

    /// The Enter action. Only the About screen has a primary action:
    /// its "View Projects" button.
    pub fn activate(&mut self, now: Instant) {
        if self.nav.current() == ScreenId::About {
            self.navigate(ScreenId::Projects, now);
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    fn on_screen_changed(&mut self, now: Instant) {
        self.scroll = 0;
        self.anim_epoch = now;
        debug!(screen = self.nav.current().as_str(), "screen changed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(now: Instant) -> App {
        App::new(FolioConfig::default(), false, now)
    }

    #[test]
    fn boot_flag_flips_only_after_the_delay() {
        let t0 = Instant::now();
        let mut app = app(t0);
        assert!(!app.booted);

        app.tick(t0 + Duration::from_millis(599));
        assert!(!app.booted);

        app.tick(t0 + Duration::from_millis(600));
        assert!(app.booted);
    }

    #[test]
    fn skip_boot_starts_on_the_desktop() {
        let t0 = Instant::now();
        let app = App::new(FolioConfig::default(), true, t0);
        assert!(app.booted);
    }

    #[test]
    fn navigation_resets_scroll_and_animation_epoch() {
        let t0 = Instant::now();
        let mut app = App::new(FolioConfig::default(), true, t0);
        app.scroll = 7;

        let t1 = t0 + Duration::from_secs(2);
        app.navigate(ScreenId::Skills, t1);

        assert_eq!(app.scroll, 0);
        assert_eq!(app.anim_elapsed(t1), Duration::ZERO);
        assert_eq!(app.nav.current(), ScreenId::Skills);
    }

    #[test]
    fn enter_on_about_jumps_to_projects() {
        let t0 = Instant::now();
        let mut app = App::new(FolioConfig::default(), true, t0);
        app.activate(t0);
        assert_eq!(app.nav.current(), ScreenId::Projects);
    }

    #[test]
    fn enter_elsewhere_does_nothing() {
        let t0 = Instant::now();
        let mut config = FolioConfig::default();
        config.start_screen = ScreenId::Skills;
        let mut app = App::new(config, true, t0);

        app.activate(t0);
        assert_eq!(app.nav.current(), ScreenId::Skills);
    }

    #[test]
    fn chrome_follows_navigation_with_the_flicker_delay() {
        let t0 = Instant::now();
        let mut app = App::new(FolioConfig::default(), true, t0);
        assert_eq!(app.chrome.title(), "ALEX_CHEN_PORTFOLIO.EXE");

        app.navigate(ScreenId::Experience, t0);
        app.tick(t0);

        // Old title holds through the dim window.
        app.tick(t0 + Duration::from_millis(199));
        assert_eq!(app.chrome.title(), "ALEX_CHEN_PORTFOLIO.EXE");
        assert!(app.chrome.is_flickering());

        app.tick(t0 + Duration::from_millis(200));
        assert_eq!(app.chrome.title(), "EXPERIENCE_LOG.TXT");

        app.tick(t0 + Duration::from_millis(350));
        assert!(!app.chrome.is_flickering());
    }

    #[test]
    fn transition_resolves_through_tick() {
        let t0 = Instant::now();
        let mut app = App::new(FolioConfig::default(), true, t0);
        app.navigate(ScreenId::Education, t0);
        assert!(app.nav.is_transitioning());

        app.tick(t0 + Duration::from_millis(400));
        assert!(!app.nav.is_transitioning());
    }
}
