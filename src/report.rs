//! Output formatting for the one-shot commands.
//!
//! Pure functions: (data, OutputFormat) -> String. No I/O.

use serde::Serialize;

use crate::store::ApplicationState;
use crate::types::{Appearance, OutputFormat, Selection};

/// One row of the option listing.
#[derive(Debug, Clone, Serialize)]
struct OptionEntry {
    id: u8,
    label: &'static str,
    appearance: Appearance,
}

/// A state together with its derived appearance, for printing.
#[derive(Debug, Clone, Serialize)]
struct StateEntry {
    selection: Selection,
    id: u8,
    label: &'static str,
    appearance: Appearance,
}

impl From<&ApplicationState> for StateEntry {
    fn from(state: &ApplicationState) -> Self {
        StateEntry {
            selection: state.selection,
            id: state.selection.id(),
            label: state.selection.label(),
            appearance: state.appearance(),
        }
    }
}

/// Format every option with the appearance it implies.
pub fn format_options(format: OutputFormat) -> String {
    let entries: Vec<OptionEntry> = Selection::all()
        .map(|sel| OptionEntry {
            id: sel.id(),
            label: sel.label(),
            appearance: Appearance::for_selection(sel),
        })
        .collect();

    match format {
        OutputFormat::Human => {
            let mut out = String::new();
            out.push_str("=== Options ===\n");
            for e in &entries {
                out.push_str(&format!("  [{}] {:<4} {}\n", e.id, e.label, e.appearance));
            }
            out
        }
        OutputFormat::Json => to_json(&entries),
    }
}

/// Format a state and its derived appearance.
pub fn format_state(state: &ApplicationState, format: OutputFormat) -> String {
    let entry = StateEntry::from(state);
    match format {
        OutputFormat::Human => format!(
            "Selection:  {} (id {})\nAppearance: {}\n",
            entry.label, entry.id, entry.appearance
        ),
        OutputFormat::Json => to_json(&entry),
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    // Plain structs of strings and integers cannot fail to serialize.
    let mut out = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| panic!("Failed to serialize to JSON: {}", e));
    out.push('\n');
    out
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_options_list_all_labels_in_order() {
        let out = format_options(OutputFormat::Human);
        assert!(out.starts_with("=== Options ==="));
        let foo = out.find("[0] Foo").unwrap();
        let boo = out.find("[1] Boo").unwrap();
        let baz = out.find("[2] Baz").unwrap();
        assert!(foo < boo && boo < baz);
    }

    #[test]
    fn human_options_show_appearance() {
        let out = format_options(OutputFormat::Human);
        let baz_line = out.lines().find(|l| l.contains("Baz")).unwrap();
        assert!(baz_line.ends_with("light"));
        let foo_line = out.lines().find(|l| l.contains("Foo")).unwrap();
        assert!(foo_line.ends_with("dark"));
    }

    #[test]
    fn json_options_are_valid_and_ordered() {
        let out = format_options(OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        let arr = parsed.as_array().unwrap();
        assert_eq!(arr.len(), 3);
        assert_eq!(arr[1]["label"], "Boo");
        assert_eq!(arr[2]["appearance"], "light");
    }

    #[test]
    fn human_state_shows_label_and_appearance() {
        let out = format_state(&ApplicationState::new(Selection::Third), OutputFormat::Human);
        assert!(out.contains("Selection:  Baz (id 2)"));
        assert!(out.contains("Appearance: light"));
    }

    #[test]
    fn json_state_has_all_fields() {
        let out = format_state(&ApplicationState::default(), OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["selection"], "first");
        assert_eq!(parsed["id"], 0);
        assert_eq!(parsed["label"], "Foo");
        assert_eq!(parsed["appearance"], "dark");
    }
}
