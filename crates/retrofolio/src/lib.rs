//! Retrofolio - a personal portfolio styled as a retro OS desktop,
//! rendered in the terminal.
//!
//! Exposes modules for integration tests; the binary entry point lives
//! in `main.rs`.

pub mod commands;
pub mod errors;
pub mod logging;
pub mod tui;
