//! Terminal lifecycle and key dispatch.

use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use folio_common::catalog::{ScreenId, PERSONAL};
use folio_common::config::FolioConfig;

use super::app::App;
use super::render::draw_ui;

pub async fn run(config: FolioConfig, skip_boot: bool) -> Result<()> {
    enable_raw_mode().map_err(|e| {
        anyhow::anyhow!(
            "Failed to enable raw mode: {}. Ensure you're running in a real terminal (TTY).",
            e
        )
    })?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| {
        let _ = disable_raw_mode();
        anyhow::anyhow!("Failed to initialize terminal: {}", e)
    })?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, skip_boot, Instant::now());
    let result = event_loop(&mut terminal, &mut app);

    // Restore the terminal even when the loop errored.
    let restore = restore_terminal(&mut terminal);
    result.and(restore)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    info!(screen = app.nav.current().as_str(), "desktop started");

    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|f| draw_ui(f, app, now))?;

        if event::poll(app.config.tick_rate())? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key, Instant::now());
                }
            }
        }

        if app.should_quit {
            info!("desktop shutting down");
            return Ok(());
        }
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    // Quit works everywhere, including the boot splash.
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL)
        | (KeyCode::Char('q'), _)
        | (KeyCode::Esc, _) => {
            app.should_quit = true;
            return;
        }
        _ => {}
    }

    // Everything else waits for the boot sequence.
    if !app.booted {
        return;
    }

    match key.code {
        KeyCode::F(1) | KeyCode::Char('?') => app.show_help = !app.show_help,
        KeyCode::Left | KeyCode::Char('h') => app.navigate_previous(now),
        KeyCode::Right | KeyCode::Char('l') => app.navigate_next(now),
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            if let Some(target) = ScreenId::from_index(index) {
                app.navigate(target, now);
            }
        }
        KeyCode::Enter => app.activate(now),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
        KeyCode::Char('g') => {
            app.toasts.push(format!("→ {}", PERSONAL.github), now);
        }
        KeyCode::Char('n') => {
            app.toasts.push(format!("→ {}", PERSONAL.linkedin), now);
        }
        KeyCode::Char('e') => {
            app.toasts.push(format!("→ mailto:{}", PERSONAL.email), now);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn desktop_app() -> App {
        App::new(FolioConfig::default(), true, Instant::now())
    }

    #[test]
    fn q_requests_quit() {
        let mut app = desktop_app();
        handle_key(&mut app, key(KeyCode::Char('q')), Instant::now());
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_requests_quit() {
        let mut app = desktop_app();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        handle_key(&mut app, ctrl_c, Instant::now());
        assert!(app.should_quit);
    }

    #[test]
    fn arrows_step_through_screens() {
        let mut app = desktop_app();
        let t0 = Instant::now();

        handle_key(&mut app, key(KeyCode::Right), t0);
        assert_eq!(app.nav.current(), ScreenId::Experience);

        let t1 = t0 + Duration::from_secs(1);
        app.tick(t1);
        handle_key(&mut app, key(KeyCode::Left), t1);
        assert_eq!(app.nav.current(), ScreenId::About);
    }

    #[test]
    fn digit_keys_jump_directly() {
        let mut app = desktop_app();
        handle_key(&mut app, key(KeyCode::Char('4')), Instant::now());
        assert_eq!(app.nav.current(), ScreenId::Projects);
    }

    #[test]
    fn contact_keys_raise_toasts() {
        let mut app = desktop_app();
        let now = Instant::now();
        handle_key(&mut app, key(KeyCode::Char('g')), now);
        handle_key(&mut app, key(KeyCode::Char('e')), now);

        let messages: Vec<&str> = app
            .toasts
            .active()
            .iter()
            .map(|t| t.message.as_str())
            .collect();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("github.com"));
        assert!(messages[1].contains("mailto:"));
    }

    #[test]
    fn navigation_keys_are_inert_during_boot() {
        let mut app = App::new(FolioConfig::default(), false, Instant::now());
        handle_key(&mut app, key(KeyCode::Right), Instant::now());
        assert_eq!(app.nav.current(), ScreenId::About);
        assert!(!app.nav.is_transitioning());
    }
}
