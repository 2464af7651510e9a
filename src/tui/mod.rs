//! TUI module for the interactive terminal portfolio.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (App, Screen, Action, Transition)
//! - `update`: Pure transitions
//! - `view`: Pure rendering
//! - `theme`: Dark and light palettes
//! - `run`: Effects boundary (terminal, threads, timers)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
