use ratatui::{prelude::*, widgets::Paragraph};

/// Key hints shown on the bottom line
pub const HINTS: &str = "Esc: quit | Ctrl-u: clear | Ctrl-z: suspend";

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StatusBarWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for StatusBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let hints = Span::styled(HINTS, Style::default().fg(Color::DarkGray));
        Paragraph::new(hints).render(area, buf);
    }
}
