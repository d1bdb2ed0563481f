//! File-backed logging for the TUI.
//!
//! Once the terminal is in raw mode nothing may print to stdout, so all
//! diagnostics go to a log file discovered with a fallback chain:
//!
//! 1. `$RETROFOLIO_LOG_FILE` (explicit override)
//! 2. `$XDG_STATE_HOME/retrofolio/tui.log`
//! 3. `~/.local/state/retrofolio/tui.log`
//!
//! Filtering follows `RUST_LOG`, defaulting to `info`. Setup is best
//! effort: a read-only filesystem disables logging rather than the app.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

fn discover_log_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("RETROFOLIO_LOG_FILE") {
        return Some(PathBuf::from(path));
    }

    if let Ok(xdg_state) = std::env::var("XDG_STATE_HOME") {
        return Some(PathBuf::from(xdg_state).join("retrofolio").join("tui.log"));
    }

    if let Ok(home) = std::env::var("HOME") {
        return Some(
            PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("retrofolio")
                .join("tui.log"),
        );
    }

    None
}

/// Install the global tracing subscriber, writing to the log file.
pub fn init() {
    let Some(path) = discover_log_path() else {
        return;
    };

    if let Some(parent) = path.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}
