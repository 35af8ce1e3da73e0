//! Pure transitions: (ApplicationState, Action) -> Transition.
//!
//! Fully testable without a terminal. Navigation and picks turn into
//! `SelectionChanged` events; the effects boundary dispatches them.

use tracing::debug;

use crate::binding;
use crate::store::{ApplicationState, Event};
use crate::types::Selection;

use super::state::{Action, Transition};

/// Pure transition function.
pub fn update(state: &ApplicationState, action: &Action) -> Transition {
    match action {
        Action::MoveLeft => move_to(state, state.selection.previous()),
        Action::MoveRight => move_to(state, state.selection.next()),
        Action::Pick(id) => match binding::send(*id) {
            Ok(event) => Transition::Dispatch(event),
            Err(e) => {
                debug!(%e, "ignoring pick");
                Transition::Stay
            }
        },
        Action::Quit => Transition::Quit,
    }
}

/// Clamped moves at either end do not dispatch.
fn move_to(state: &ApplicationState, target: Selection) -> Transition {
    if target == state.selection {
        Transition::Stay
    } else {
        Transition::Dispatch(Event::SelectionChanged(target))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn at(selection: Selection) -> ApplicationState {
        ApplicationState::new(selection)
    }

    #[test]
    fn quit_quits() {
        assert_eq!(update(&at(Selection::First), &Action::Quit), Transition::Quit);
    }

    #[test]
    fn move_right_dispatches_next() {
        assert_eq!(
            update(&at(Selection::First), &Action::MoveRight),
            Transition::Dispatch(Event::SelectionChanged(Selection::Second))
        );
    }

    #[test]
    fn move_left_dispatches_previous() {
        assert_eq!(
            update(&at(Selection::Third), &Action::MoveLeft),
            Transition::Dispatch(Event::SelectionChanged(Selection::Second))
        );
    }

    #[test]
    fn move_left_at_first_stays() {
        assert_eq!(update(&at(Selection::First), &Action::MoveLeft), Transition::Stay);
    }

    #[test]
    fn move_right_at_last_stays() {
        assert_eq!(update(&at(Selection::Third), &Action::MoveRight), Transition::Stay);
    }

    #[test]
    fn pick_valid_id_dispatches() {
        assert_eq!(
            update(&at(Selection::First), &Action::Pick(2)),
            Transition::Dispatch(Event::SelectionChanged(Selection::Third))
        );
    }

    #[test]
    fn pick_current_id_still_dispatches() {
        // Self-transition is a legal event.
        assert_eq!(
            update(&at(Selection::Second), &Action::Pick(1)),
            Transition::Dispatch(Event::SelectionChanged(Selection::Second))
        );
    }

    #[test]
    fn pick_out_of_range_is_noop() {
        assert_eq!(update(&at(Selection::First), &Action::Pick(5)), Transition::Stay);
        assert_eq!(update(&at(Selection::First), &Action::Pick(-1)), Transition::Stay);
    }
}
