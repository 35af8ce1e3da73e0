//! Pure rendering: map the application state to ratatui widgets.
//!
//! Everything drawn is read from [`binding::project`]: the segment labels,
//! which one is highlighted, and the palette of the derived appearance.
//! The only effect is `Frame::render_widget()`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::binding::{self, ControlView};
use crate::store::ApplicationState;

use super::theme::{self, Palette};

const TITLE: &str = "Select something";
const HELP: &str = "[←/→] move  [1-3] pick  [q] quit";

/// Render the whole screen.
pub fn render(state: &ApplicationState, frame: &mut Frame) {
    let view = binding::project(state);
    let palette = theme::palette(view.appearance);
    let area = frame.area();

    // Color scheme covers the whole screen, not just the control.
    frame.render_widget(Block::default().style(palette.base), area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Length(3), // control
        Constraint::Min(0),    // spacer
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(palette), chunks[0]);
    render_control(&view, palette, frame, chunks[1]);
    frame.render_widget(render_help(&view, palette), chunks[3]);
}

fn render_title(palette: &Palette) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(TITLE, palette.title))).centered()
}

/// The segmented control: one bordered row, segments separated by bars.
fn render_control(view: &ControlView, palette: &Palette, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::with_capacity(view.options.len() * 2);
    for (i, option) in view.options.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("│", palette.border));
        }
        let style = if option.selected {
            palette.segment_selected
        } else {
            palette.segment
        };
        spans.push(Span::styled(format!(" {} ", option.label), style));
    }

    let block = Block::bordered().border_style(palette.border);
    let paragraph = Paragraph::new(Line::from(spans)).centered().block(block);
    frame.render_widget(paragraph, area);
}

fn render_help(view: &ControlView, palette: &Palette) -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled(HELP, palette.help),
        Span::styled(format!("  ({})", view.appearance), palette.help),
    ]))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::style::Color;

    use crate::types::Selection;

    fn draw(selection: Selection) -> Buffer {
        let backend = TestBackend::new(50, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = ApplicationState::new(selection);
        terminal.draw(|frame| render(&state, frame)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn labels_render_in_enumeration_order() {
        let out = text(&draw(Selection::First));
        let foo = out.find("Foo").unwrap();
        let boo = out.find("Boo").unwrap();
        let baz = out.find("Baz").unwrap();
        assert!(foo < boo && boo < baz);
    }

    #[test]
    fn title_is_rendered() {
        assert!(text(&draw(Selection::First)).contains(TITLE));
    }

    #[test]
    fn dark_selection_paints_dark_background() {
        let buffer = draw(Selection::Second);
        // Bottom-left spacer cell only carries the base style.
        assert_eq!(buffer[(0, 5)].bg, Color::Black);
    }

    #[test]
    fn light_selection_paints_light_background() {
        let buffer = draw(Selection::Third);
        assert_eq!(buffer[(0, 5)].bg, Color::White);
        assert!(text(&buffer).contains("(light)"));
    }

    #[test]
    fn highlighted_segment_uses_selected_style() {
        let buffer = draw(Selection::Third);
        let (x, y) = find_cell(&buffer, "Baz").unwrap();
        assert_eq!(buffer[(x, y)].bg, theme::LIGHT.segment_selected.bg.unwrap());
        let (x, y) = find_cell(&buffer, "Foo").unwrap();
        assert_ne!(buffer[(x, y)].bg, theme::LIGHT.segment_selected.bg.unwrap());
    }

    /// Position of the first cell where `word` starts, one char per cell.
    fn find_cell(buffer: &Buffer, word: &str) -> Option<(u16, u16)> {
        let area = buffer.area;
        for y in 0..area.height {
            for x in 0..area.width {
                let fits = word.chars().enumerate().all(|(i, ch)| {
                    let cx = x + i as u16;
                    cx < area.width && buffer[(cx, y)].symbol() == ch.to_string()
                });
                if fits {
                    return Some((x, y));
                }
            }
        }
        None
    }
}
