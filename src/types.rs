//! Domain types for scheme-picker.
//!
//! The selection is a closed enumeration: every value that can exist is
//! listed in [`Selection::ALL`]. Raw ids only become a `Selection` through
//! the checked [`Selection::from_id`] lookup.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;

// ============================================================================
// ERRORS
// ============================================================================

/// Failure to turn outside input into a [`Selection`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// The numeric id is not one of the enumerated ids.
    #[error("invalid selection id {0} (expected 0, 1 or 2)")]
    InvalidIdentifier(i64),
    /// The text is neither a known label nor a number.
    #[error("unknown selection '{0}' (expected Foo, Boo, Baz or an id)")]
    UnknownLabel(String),
}

// ============================================================================
// SELECTION
// ============================================================================

/// The value driven by the segmented control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    /// id 0, "Foo".
    #[default]
    First,
    /// id 1, "Boo".
    Second,
    /// id 2, "Baz".
    Third,
}

impl Selection {
    /// Every selection, in control order.
    pub const ALL: [Selection; 3] = [Selection::First, Selection::Second, Selection::Third];

    /// Iterate all selections in stable order.
    pub fn all() -> impl Iterator<Item = Selection> {
        Self::ALL.into_iter()
    }

    /// Stable numeric identity used by the control binding.
    pub fn id(self) -> u8 {
        match self {
            Selection::First => 0,
            Selection::Second => 1,
            Selection::Third => 2,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Selection::First => "Foo",
            Selection::Second => "Boo",
            Selection::Third => "Baz",
        }
    }

    /// Checked lookup by id.
    ///
    /// Any id outside `0..=2` is reported as
    /// [`SelectionError::InvalidIdentifier`], never a panic.
    pub fn from_id(id: i64) -> Result<Self, SelectionError> {
        Self::all()
            .find(|s| i64::from(s.id()) == id)
            .ok_or(SelectionError::InvalidIdentifier(id))
    }

    /// Neighbour to the left, clamped at the first option.
    pub fn previous(self) -> Self {
        match self {
            Selection::First | Selection::Second => Selection::First,
            Selection::Third => Selection::Second,
        }
    }

    /// Neighbour to the right, clamped at the last option.
    pub fn next(self) -> Self {
        match self {
            Selection::First => Selection::Second,
            Selection::Second | Selection::Third => Selection::Third,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<i64> for Selection {
    type Error = SelectionError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        Selection::from_id(id)
    }
}

/// Parses either a label ("baz", case-insensitive) or a numeric id ("2").
impl FromStr for Selection {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(id) = trimmed.parse::<i64>() {
            return Selection::from_id(id);
        }
        Selection::all()
            .find(|sel| sel.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SelectionError::UnknownLabel(trimmed.to_string()))
    }
}

// ============================================================================
// APPEARANCE
// ============================================================================

/// Light or dark color scheme. Always derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Dark,
    Light,
}

impl Appearance {
    /// The scheme a selection implies: Foo and Boo are dark, Baz is light.
    pub fn for_selection(selection: Selection) -> Self {
        match selection {
            Selection::First | Selection::Second => Appearance::Dark,
            Selection::Third => Appearance::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Appearance::Dark)
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Appearance::Dark => f.write_str("dark"),
            Appearance::Light => f.write_str("light"),
        }
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for the one-shot commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// Where tracing output goes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogSink {
    /// No subscriber installed.
    #[default]
    Disabled,
    /// Standard error (one-shot commands only; the TUI owns the terminal).
    Stderr,
    /// Append to a file.
    File(PathBuf),
}

/// Settings for one interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionConfig {
    /// Selection the session starts on.
    pub initial: Selection,
    /// Log destination.
    pub log: LogSink,
}

// ============================================================================
// TESTS
// ============================================================================
