//! Application state, the pure update function, and the observable store.
//!
//! `apply` is the only way state changes. The `Store` owns the single
//! `ApplicationState`, runs `apply` on dispatch, then calls every
//! registered observer synchronously with the new state.

use std::fmt;

use serde::Serialize;
use tracing::info;

use crate::types::{Appearance, Selection};

// ============================================================================
// STATE
// ============================================================================

/// The whole application state: one selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ApplicationState {
    pub selection: Selection,
}

impl ApplicationState {
    pub fn new(selection: Selection) -> Self {
        ApplicationState { selection }
    }

    /// Color scheme implied by the current selection. Recomputed on every call.
    pub fn appearance(&self) -> Appearance {
        Appearance::for_selection(self.selection)
    }
}

// ============================================================================
// EVENTS
// ============================================================================

/// Something that happened which may change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The user picked a value on the control.
    SelectionChanged(Selection),
}

// ============================================================================
// UPDATE
// ============================================================================

/// Pure transition: `(state, event) -> state`. Cannot fail.
pub fn apply(state: ApplicationState, event: &Event) -> ApplicationState {
    let mut next = state;
    match *event {
        Event::SelectionChanged(selection) => next.selection = selection,
    }
    next
}

// ============================================================================
// STORE
// ============================================================================

/// Callback invoked after every dispatch with the resulting state.
pub type Observer = Box<dyn FnMut(&ApplicationState)>;

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owner of the application state.
///
/// Readers borrow `&ApplicationState`; the only writer is [`Store::dispatch`].
pub struct Store {
    state: ApplicationState,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl Store {
    pub fn new(initial: ApplicationState) -> Self {
        Store {
            state: initial,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Current state, read-only.
    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    /// Register an observer. It is called after each subsequent dispatch.
    pub fn subscribe(&mut self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Apply an event, then notify observers in subscription order.
    pub fn dispatch(&mut self, event: Event) {
        self.state = apply(self.state, &event);
        info!(
            ?event,
            selection = %self.state.selection,
            appearance = %self.state.appearance(),
            "state updated"
        );
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.state);
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::new(ApplicationState::default())
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn state(selection: Selection) -> ApplicationState {
        ApplicationState::new(selection)
    }

    #[test]
    fn initial_state_is_first_and_dark() {
        let initial = ApplicationState::default();
        assert_eq!(initial.selection, Selection::First);
        assert_eq!(initial.appearance(), Appearance::Dark);
    }

    #[test]
    fn apply_is_idempotent_for_current_selection() {
        for sel in Selection::all() {
            let s = state(sel);
            assert_eq!(apply(s, &Event::SelectionChanged(s.selection)), s);
        }
    }

    #[test]
    fn apply_is_deterministic_regardless_of_prior_state() {
        for prior in Selection::all() {
            for target in Selection::all() {
                let next = apply(state(prior), &Event::SelectionChanged(target));
                assert_eq!(next, state(target));
            }
        }
    }

    #[test]
    fn appearance_is_dark_iff_first_or_second() {
        for sel in Selection::all() {
            let dark = matches!(sel, Selection::First | Selection::Second);
            assert_eq!(state(sel).appearance().is_dark(), dark);
        }
    }

    #[test]
    fn picking_third_switches_to_light() {
        let mut store = Store::default();
        store.dispatch(Event::SelectionChanged(Selection::Third));
        assert_eq!(store.state().selection, Selection::Third);
        assert_eq!(store.state().appearance(), Appearance::Light);
    }

    #[test]
    fn second_then_first_returns_to_initial() {
        let mut store = Store::default();
        let initial = *store.state();
        store.dispatch(Event::SelectionChanged(Selection::Second));
        store.dispatch(Event::SelectionChanged(Selection::First));
        assert_eq!(*store.state(), initial);
    }

    #[test]
    fn observers_see_new_state_once_per_dispatch() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = Store::default();

        let sink = Rc::clone(&seen);
        store.subscribe(Box::new(move |s| sink.borrow_mut().push(s.selection)));

        store.dispatch(Event::SelectionChanged(Selection::Third));
        store.dispatch(Event::SelectionChanged(Selection::Third));
        store.dispatch(Event::SelectionChanged(Selection::Second));

        assert_eq!(
            *seen.borrow(),
            vec![Selection::Third, Selection::Third, Selection::Second]
        );
    }

    #[test]
    fn observers_run_in_subscription_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut store = Store::default();

        let a = Rc::clone(&order);
        store.subscribe(Box::new(move |_| a.borrow_mut().push("a")));
        let b = Rc::clone(&order);
        store.subscribe(Box::new(move |_| b.borrow_mut().push("b")));

        store.dispatch(Event::SelectionChanged(Selection::Second));
        assert_eq!(*order.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn unsubscribed_observer_is_not_called() {
        let calls = Rc::new(RefCell::new(0));
        let mut store = Store::default();

        let counter = Rc::clone(&calls);
        let id = store.subscribe(Box::new(move |_| *counter.borrow_mut() += 1));
        store.dispatch(Event::SelectionChanged(Selection::Second));

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.dispatch(Event::SelectionChanged(Selection::Third));

        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn no_dispatch_means_no_notification() {
        let calls = Rc::new(RefCell::new(0));
        let mut store = Store::new(state(Selection::Second));
        let counter = Rc::clone(&calls);
        store.subscribe(Box::new(move |_| *counter.borrow_mut() += 1));

        assert_eq!(store.state().selection, Selection::Second);
        assert_eq!(*calls.borrow(), 0);
    }
}
