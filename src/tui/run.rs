//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! Everything runs on one thread: block on the next terminal event, map
//! it to an action, run the pure update, dispatch into the store, and
//! redraw if the store observer asked for it.

use std::io;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use tracing::{debug, info};

use crate::logging;
use crate::types::SessionConfig;

use super::state::{Action, App, AppEvent, Transition};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => Some(Action::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Some(Action::MoveRight),

        // Digits are 1-based positions; the id is checked in update.
        KeyCode::Char(c @ '1'..='9') => Some(Action::Pick(i64::from(c as u8 - b'1'))),

        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

        _ => None,
    }
}

/// Map a raw terminal event to an AppEvent. Mouse, focus and key-release
/// events are dropped.
fn map_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(AppEvent::Key(key)),
        Event::Resize(..) => Some(AppEvent::Resize),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    undo_on_err(
        io::stdout().execute(EnterAlternateScreen).map(|_| ()),
        disable_raw_mode,
    )?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Run `undo` when `result` failed, keeping the original error.
fn undo_on_err<T>(result: io::Result<T>, undo: impl FnOnce() -> io::Result<()>) -> io::Result<T> {
    if result.is_err() {
        let _ = undo();
    }
    result
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the interactive picker until the user quits.
///
/// Logging is installed from `config.log` before the terminal is touched.
pub fn run(config: SessionConfig) -> io::Result<()> {
    logging::init(&config.log).map_err(io::Error::other)?;
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(&config);
    info!(initial = %config.initial, "session started");

    let result = event_loop(&mut terminal, &mut app, event::read);

    // Restore even when the loop failed, then report the first error.
    let restored = restore_terminal();
    info!(selection = %app.state().selection, "session ended");
    result.and(restored)
}

/// Draw when asked, stop on quit, otherwise block on the next event.
fn event_loop<B, F>(terminal: &mut Terminal<B>, app: &mut App, mut next_event: F) -> io::Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    F: FnMut() -> io::Result<Event>,
{
    loop {
        if app.take_redraw() {
            terminal
                .draw(|frame| render(app.state(), frame))
                .map_err(io::Error::other)?;
        }

        if app.should_quit {
            return Ok(());
        }

        step(app, next_event()?);
    }
}

/// Feed one raw terminal event through mapping and update.
fn step(app: &mut App, event: Event) {
    if let Some(event) = map_event(event) {
        handle_event(app, event);
    }
}

/// Apply one input event to the app.
fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Resize => app.invalidate(),
        AppEvent::Key(key) => {
            let Some(action) = map_key(key) else {
                debug!(?key, "unmapped key");
                return;
            };
            match update(app.state(), &action) {
                Transition::Stay => {}
                Transition::Dispatch(event) => app.dispatch(event),
                Transition::Quit => app.should_quit = true,
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
