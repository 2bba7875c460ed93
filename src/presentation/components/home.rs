//! Home component
//!
//! The single screen of the application: the input box, the echoed text and
//! a status line.

use ratatui::layout::Position;
use ratatui::prelude::*;
use unicode_width::UnicodeWidthStr;

use crate::{
    core::state::AppState,
    presentation::widgets::{echo::EchoWidget, input::InputWidget, status_bar::StatusBarWidget},
};

/// Home component
///
/// Stateless: every frame is a pure projection of the current AppState.
#[derive(Debug, Default)]
pub struct HomeComponent;

impl HomeComponent {
    /// Create a new home component
    pub fn new() -> Self {
        Self
    }

    /// Render the home view
    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Input box
                Constraint::Length(2), // Caption and echo line
                Constraint::Min(0),    // Filler
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        frame.render_widget(InputWidget::new(state.content()), chunks[0]);
        frame.render_widget(EchoWidget::new(state.content()), chunks[1]);
        frame.render_widget(StatusBarWidget::new(), chunks[3]);

        // Keep the terminal cursor at the end of the visible input text
        let inner_width = chunks[0].width.saturating_sub(2);
        let column = u16::try_from(state.content().width())
            .unwrap_or(u16::MAX)
            .min(inner_width.saturating_sub(1));
        frame.set_cursor_position(Position::new(
            chunks[0].x.saturating_add(1).saturating_add(column),
            chunks[0].y.saturating_add(1),
        ));
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use super::*;
    use crate::{
        core::state::InputState,
        presentation::widgets::{echo::CAPTION, input::PLACEHOLDER},
    };

    fn state_with(content: &str) -> AppState {
        AppState {
            input: InputState::new(content.to_string()),
            ..Default::default()
        }
    }

    fn render(state: &AppState, width: u16, height: u16) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        let home = HomeComponent::new();
        terminal
            .draw(|frame| home.view(state, frame, frame.area()))
            .expect("draw");
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &Buffer, row: u16) -> String {
        let width = buffer.area.width;
        let start = (width * row) as usize;
        buffer.content()[start..start + width as usize]
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_initial_view_shows_placeholder_and_empty_echo() {
        let buffer = render(&AppState::new(), 60, 10);

        assert!(row_text(&buffer, 1).contains(PLACEHOLDER));
        assert!(row_text(&buffer, 3).contains(CAPTION));
        assert_eq!(row_text(&buffer, 4).trim(), "");
    }

    #[test]
    fn test_view_mirrors_content_into_input_and_echo() {
        let buffer = render(&state_with("hello"), 60, 10);

        // Input box interior and echo line both show the content
        assert!(row_text(&buffer, 1).contains("hello"));
        assert!(row_text(&buffer, 4).contains("hello"));
        assert!(!row_text(&buffer, 1).contains(PLACEHOLDER));
    }

    #[test]
    fn test_view_shows_status_hints_on_last_line() {
        let buffer = render(&AppState::new(), 60, 10);

        assert!(row_text(&buffer, 9).contains("Esc: quit"));
    }

    #[test]
    fn test_view_mirrors_whitespace_and_unicode() {
        let buffer = render(&state_with("héllo wörld"), 60, 10);

        assert!(row_text(&buffer, 4).contains("héllo wörld"));
    }

    #[test]
    fn test_view_is_deterministic() {
        let state = state_with("same");

        let first = render(&state, 60, 10);
        let second = render(&state, 60, 10);

        assert_eq!(first, second);
    }

    #[test]
    fn test_view_does_not_panic_on_tiny_terminal() {
        let _ = render(&state_with("text"), 10, 3);
    }
}
