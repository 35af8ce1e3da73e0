//! TUI module for the interactive picker.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (App, Action, Transition)
//! - `update`: Pure transitions from actions to store events
//! - `view`: Pure rendering
//! - `theme`: Palettes per appearance
//! - `run`: Effects (terminal, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
