//! scheme-picker: a segmented picker whose selection drives the color scheme.

pub mod binding;
pub mod logging;
pub mod report;
pub mod store;
pub mod tui;
pub mod types;
