use ratatui::{prelude::*, widgets::*};
use unicode_width::UnicodeWidthChar;

/// Hint shown while the input is empty
pub const PLACEHOLDER: &str = "Type something...";

/// The single-line text input
///
/// Stateless: the full content lives in the state and is passed in per
/// frame. When the content is wider than the box, the tail stays visible
/// since editing always happens at the end.
pub struct InputWidget<'a> {
    content: &'a str,
}

impl<'a> InputWidget<'a> {
    pub fn new(content: &'a str) -> Self {
        Self { content }
    }

    /// Longest suffix of `content` that fits into `max_width` columns
    fn visible_tail(content: &str, max_width: usize) -> &str {
        let mut width = 0usize;
        let mut start = content.len();
        for (idx, ch) in content.char_indices().rev() {
            let w = ch.width().unwrap_or(0);
            if width + w > max_width {
                break;
            }
            width += w;
            start = idx;
        }
        &content[start..]
    }
}

impl Widget for InputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let block = Block::default().borders(Borders::ALL).title("Input");
        let inner = block.inner(area);
        block.render(area, buf);

        if self.content.is_empty() {
            let hint = Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray).italic());
            Paragraph::new(hint).render(inner, buf);
        } else {
            // Reserve one column for the cursor
            let max_width = inner.width.saturating_sub(1) as usize;
            let visible = Self::visible_tail(self.content, max_width);
            Paragraph::new(visible).render(inner, buf);
        }
    }
}
