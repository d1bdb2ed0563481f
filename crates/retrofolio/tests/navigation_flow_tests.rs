//! End-to-end state flow driven with synthetic clocks.

use std::time::{Duration, Instant};

use folio_common::catalog::ScreenId;
use folio_common::config::FolioConfig;
use retrofolio::tui::app::App;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn boot_then_walk_every_screen_forward() {
    let t0 = Instant::now();
    let mut app = App::new(FolioConfig::default(), false, t0);

    let mut now = t0 + ms(600);
    app.tick(now);
    assert!(app.booted);
    assert_eq!(app.nav.current(), ScreenId::About);

    for expected in [
        ScreenId::Experience,
        ScreenId::Skills,
        ScreenId::Projects,
        ScreenId::Education,
    ] {
        app.navigate_next(now);
        assert_eq!(app.nav.current(), expected);

        // Let the transition and the title flicker settle.
        now += ms(500);
        app.tick(now);
        assert!(!app.nav.is_transitioning());
        assert!(!app.chrome.is_flickering());
    }

    // Right at the end of the strip is a no-op.
    app.navigate_next(now);
    assert_eq!(app.nav.current(), ScreenId::Education);
}

#[test]
fn requests_during_a_transition_are_dropped() {
    let t0 = Instant::now();
    let mut app = App::new(FolioConfig::default(), true, t0);

    app.navigate(ScreenId::Education, t0);
    assert_eq!(app.nav.current(), ScreenId::Education);

    // Mid-flight input does not retarget the machine.
    let mid = t0 + ms(200);
    app.tick(mid);
    app.navigate(ScreenId::Skills, mid);
    assert_eq!(app.nav.current(), ScreenId::Education);

    let done = t0 + ms(400);
    app.tick(done);
    assert!(!app.nav.is_transitioning());

    // After it lands the machine accepts input again.
    app.navigate(ScreenId::Skills, done);
    assert_eq!(app.nav.current(), ScreenId::Skills);
}

#[test]
fn title_flicker_tracks_a_quick_back_and_forth() {
    let t0 = Instant::now();
    let mut app = App::new(FolioConfig::default(), true, t0);

    app.navigate(ScreenId::Projects, t0);
    app.tick(t0);
    assert!(app.chrome.is_flickering());

    // The swap lands while the user is already heading back.
    let swap = t0 + ms(200);
    app.tick(swap);
    assert_eq!(app.chrome.title(), "Project Explorer");

    let back = t0 + ms(450);
    app.tick(back);
    app.navigate(ScreenId::About, back);
    app.tick(back);
    assert!(app.chrome.is_flickering());

    let settled = t0 + ms(450 + 350);
    app.tick(settled);
    assert_eq!(app.chrome.title(), "ALEX_CHEN_PORTFOLIO.EXE");
    assert!(!app.chrome.is_flickering());
}

#[test]
fn toasts_expire_on_their_own_clock() {
    let t0 = Instant::now();
    let mut app = App::new(FolioConfig::default(), true, t0);

    app.toasts.push("→ https://github.com/alexchen", t0);
    app.tick(t0 + ms(1000));
    assert_eq!(app.toasts.active().len(), 1);

    app.tick(t0 + ms(2500));
    assert!(app.toasts.active().is_empty());
}

#[test]
fn config_start_screen_is_honored() {
    let mut config = FolioConfig::default();
    config.start_screen = ScreenId::Projects;

    let app = App::new(config, true, Instant::now());
    assert_eq!(app.nav.current(), ScreenId::Projects);
    assert_eq!(app.chrome.title(), "Project Explorer");
}
