//! termfolio: A terminal portfolio with a typewriter headline and a
//! persisted color theme.

pub mod content;
pub mod prefs;
pub mod report;
pub mod timer;
pub mod tui;
pub mod types;
pub mod typing;
