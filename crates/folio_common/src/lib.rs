//! Shared library for the Retrofolio terminal portfolio.
//!
//! Everything the UI renders comes from here: the static content
//! catalog, the closed icon vocabularies, and the small state machines
//! that drive boot, navigation, and the title-bar flicker. The UI crate
//! owns the terminal; this crate owns the semantics.

pub mod anim;
pub mod boot;
pub mod catalog;
pub mod chrome;
pub mod clock;
pub mod config;
pub mod icons;
pub mod nav;
pub mod toast;
