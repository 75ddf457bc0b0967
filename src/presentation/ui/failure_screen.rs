//! Failure screen for a failed image batch.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::ui::utils::centered_rect;

/// Shown when the image batch failed; the gallery stays empty.
pub struct FailureScreen<'a> {
    title: &'a str,
    reason: &'a str,
}

impl<'a> FailureScreen<'a> {
    /// Creates the screen with the failure description.
    #[must_use]
    pub const fn new(title: &'a str, reason: &'a str) -> Self {
        Self { title, reason }
    }
}

impl Widget for FailureScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = centered_rect(70, 40, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(format!(" {} ", self.title));
        let inner = block.inner(area);
        block.render(area, buf);

        let [heading_area, reason_area, hint_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(Line::from(Span::styled(
            "Could not load product images",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .render(heading_area, buf);

        Paragraph::new(format!("Error: {}", self.reason))
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(reason_area, buf);

        Paragraph::new(Line::from(Span::styled(
            "press q to quit",
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center)
        .render(hint_area, buf);
    }
}
