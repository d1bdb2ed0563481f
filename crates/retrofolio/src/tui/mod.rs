//! TUI - the retro desktop itself.
//!
//! - `app`: composition root state (boot gate, navigation, chrome,
//!   toasts) and the per-frame timer tick
//! - `event_loop`: terminal setup/teardown and input handling
//! - `layout`: canonical layout grid
//! - `render`: drawing functions for splash, window chrome, overlays
//! - `taskbar`: taskbar rendering and its compose helpers
//! - `screens`: the five content screen renderers
//! - `utils`: wrapping and overlay helpers

pub mod app;
pub mod event_loop;
pub mod layout;
pub mod render;
pub mod screens;
pub mod taskbar;
pub mod utils;

pub use event_loop::run;
