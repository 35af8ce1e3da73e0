//! View binding: the projections a segmented control needs from the store.
//!
//! Read side: which option is highlighted and which color scheme to use.
//! Write side: turning a picked option id back into an [`Event`].

use crate::store::{ApplicationState, Event};
use crate::types::{Appearance, Selection, SelectionError};

/// One segment of the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentOption {
    pub id: u8,
    pub label: &'static str,
    pub selected: bool,
}

/// Read projection of the state for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlView {
    /// One entry per selection, in enumeration order.
    pub options: Vec<SegmentOption>,
    pub appearance: Appearance,
}

/// Project the state into what the control renders.
///
/// Options come from iterating the enumeration, so every id here is valid.
pub fn project(state: &ApplicationState) -> ControlView {
    let options = Selection::all()
        .map(|sel| SegmentOption {
            id: sel.id(),
            label: sel.label(),
            selected: sel == state.selection,
        })
        .collect();

    ControlView {
        options,
        appearance: state.appearance(),
    }
}

/// Write projection: a picked option id becomes a `SelectionChanged` event.
///
/// The id is checked; ids that no option carries are rejected.
pub fn send(id: i64) -> Result<Event, SelectionError> {
    Selection::from_id(id).map(Event::SelectionChanged)
}
