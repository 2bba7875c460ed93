use ratatui::{prelude::*, widgets::Paragraph};

/// Static caption above the mirrored text
pub const CAPTION: &str = "You typed:";

/// Caption plus the line that mirrors the input content
pub struct EchoWidget<'a> {
    content: &'a str,
}

impl<'a> EchoWidget<'a> {
    pub fn new(content: &'a str) -> Self {
        Self { content }
    }
}

impl Widget for EchoWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(1), // Caption line
                Constraint::Length(1), // Mirrored text line
            ],
        )
        .split(area);

        let caption = Span::styled(CAPTION, Style::default().fg(Color::Gray).bold());
        Paragraph::new(caption).render(layout[0], buf);

        Paragraph::new(self.content).render(layout[1], buf);
    }
}
