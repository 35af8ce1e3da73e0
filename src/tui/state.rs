//! TUI state algebra: pure types, zero effects.
//!
//! The application state itself lives in the [`Store`]. `App` adds only
//! what the event loop needs around it: a redraw flag and a quit flag.

use std::cell::Cell;
use std::rc::Rc;

use crossterm::event::KeyEvent;

use crate::store::{ApplicationState, Event, Store};
use crate::types::SessionConfig;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Terminal input the event loop reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A key press.
    Key(KeyEvent),
    /// The terminal was resized; redraw without touching state.
    Resize,
}

// ============================================================================
// APPLICATION
// ============================================================================

/// Top-level TUI model.
///
/// Owns the store. The view only ever sees `&ApplicationState`.
#[derive(Debug)]
pub struct App {
    store: Store,

    /// Set by the store observer after each dispatch, cleared after drawing.
    needs_redraw: Rc<Cell<bool>>,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    /// Create an App for a session. The first frame is always drawn.
    pub fn new(config: &SessionConfig) -> Self {
        let mut store = Store::new(ApplicationState::new(config.initial));
        let needs_redraw = Rc::new(Cell::new(true));

        let flag = Rc::clone(&needs_redraw);
        store.subscribe(Box::new(move |_| flag.set(true)));

        App {
            store,
            needs_redraw,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &ApplicationState {
        self.store.state()
    }

    /// Route an event through the store.
    pub fn dispatch(&mut self, event: Event) {
        self.store.dispatch(event);
    }

    /// Ask for a redraw without a state change (resize).
    pub fn invalidate(&self) {
        self.needs_redraw.set(true);
    }

    /// Returns whether a redraw is pending and clears the flag.
    pub fn take_redraw(&self) -> bool {
        self.needs_redraw.replace(false)
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move the highlight one segment left.
    MoveLeft,
    /// Move the highlight one segment right.
    MoveRight,
    /// Pick the segment with this raw id (unchecked until update).
    Pick(i64),
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure update.
///
/// Pure code describes the event; the effects layer dispatches it.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Nothing to do.
    Stay,
    /// Dispatch this event into the store.
    Dispatch(Event),
    /// Quit the application.
    Quit,
}

// ============================================================================
// TESTS
// ============================================================================
