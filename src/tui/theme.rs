//! TUI color schemes and style constants.
//!
//! One palette per [`Appearance`]. The view picks the palette from the
//! derived appearance on every frame; nothing here is stateful.

use ratatui::style::{Color, Modifier, Style};

use crate::types::Appearance;

// ============================================================================
// PALETTES
// ============================================================================

/// Styles for every element the view draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Whole-screen base: background and default text.
    pub base: Style,
    /// Title line.
    pub title: Style,
    /// Unselected segment.
    pub segment: Style,
    /// Highlighted segment.
    pub segment_selected: Style,
    /// Control border.
    pub border: Style,
    /// Footer / help line.
    pub help: Style,
}

pub const DARK: Palette = Palette {
    base: Style::new().fg(Color::Gray).bg(Color::Black),
    title: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
    segment: Style::new().fg(Color::Gray),
    segment_selected: Style::new()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    border: Style::new().fg(Color::DarkGray),
    help: Style::new().fg(Color::DarkGray),
};

pub const LIGHT: Palette = Palette {
    base: Style::new().fg(Color::Black).bg(Color::White),
    title: Style::new().fg(Color::Black).add_modifier(Modifier::BOLD),
    segment: Style::new().fg(Color::DarkGray),
    segment_selected: Style::new()
        .fg(Color::White)
        .bg(Color::Blue)
        .add_modifier(Modifier::BOLD),
    border: Style::new().fg(Color::Gray),
    help: Style::new().fg(Color::Gray),
};

/// Palette for an appearance.
pub fn palette(appearance: Appearance) -> &'static Palette {
    match appearance {
        Appearance::Dark => &DARK,
        Appearance::Light => &LIGHT,
    }
}

// ============================================================================
// TESTS
// ============================================================================
