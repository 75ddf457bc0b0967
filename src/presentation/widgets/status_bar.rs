//! Status bar widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Status bar severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Informational.
    Info,
    /// Warning.
    Warning,
    /// Error.
    Error,
}

impl StatusLevel {
    /// Returns color for level.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

/// One-line bar with a message on the left and key hints on the right.
#[derive(Debug, Clone)]
pub struct StatusBar {
    message: String,
    hints: String,
    level: StatusLevel,
}

impl StatusBar {
    /// Creates a bar with the given message and level.
    #[must_use]
    pub fn new(message: impl Into<String>, level: StatusLevel) -> Self {
        Self {
            message: message.into(),
            hints: String::new(),
            level,
        }
    }

    /// Sets the right-aligned key hints.
    #[must_use]
    pub fn hints(mut self, hints: impl Into<String>) -> Self {
        self.hints = hints.into();
        self
    }

    /// Creates info status bar.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, StatusLevel::Info)
    }

    /// Creates warning status bar.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, StatusLevel::Warning)
    }

    /// Creates error status bar.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, StatusLevel::Error)
    }

    /// Returns the level.
    #[must_use]
    pub const fn level(&self) -> StatusLevel {
        self.level
    }
}

/// Cuts `text` to at most `max` display columns.
fn truncate_to_width(text: &str, max: usize) -> &str {
    if text.width() <= max {
        return text;
    }

    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max {
            return &text[..idx];
        }
        used += w;
    }
    text
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .fg(self.level.color())
            .add_modifier(Modifier::BOLD);
        let hint_style = Style::default().fg(Color::DarkGray);

        let width = area.width as usize;
        let hints_width = self.hints.width();

        // Hints only when the message still fits next to them.
        let show_hints = !self.hints.is_empty() && self.message.width() + 1 + hints_width <= width;

        let message_room = if show_hints {
            width - hints_width - 1
        } else {
            width
        };
        let message = truncate_to_width(&self.message, message_room);

        let mut spans = vec![Span::styled(message, style)];

        if show_hints {
            let padding = width - message.width() - hints_width;
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::styled(self.hints.as_str(), hint_style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
