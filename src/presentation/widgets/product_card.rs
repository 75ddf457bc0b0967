//! One gallery row: the picture above its size and price labels.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};
use ratatui_image::StatefulImage;

use super::image_state::{PreviewStatus, ProductImage};
use crate::domain::entities::ProductRecord;

/// Text rows below the picture.
const LABEL_ROWS: u16 = 2;

/// Colors of a product card.
pub struct ProductCardStyle {
    pub border: Style,
    pub size: Style,
    pub price: Style,
    pub placeholder: Style,
}

impl Default for ProductCardStyle {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::DarkGray),
            size: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            price: Style::default().fg(Color::Green),
            placeholder: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Bordered card for one product; state is the row's preview.
pub struct ProductCard<'a> {
    record: &'a ProductRecord,
    style: ProductCardStyle,
}

impl<'a> ProductCard<'a> {
    /// Creates a card with the default style.
    #[must_use]
    pub fn new(record: &'a ProductRecord) -> Self {
        Self {
            record,
            style: ProductCardStyle::default(),
        }
    }

    /// Total rows a card takes for the given picture height.
    #[must_use]
    pub const fn height(image_height: u16) -> u16 {
        image_height + LABEL_ROWS + 2
    }
}

impl StatefulWidget for ProductCard<'_> {
    type State = ProductImage;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.style.border);
        let inner = block.inner(area);
        block.render(area, buf);

        let [image_area, size_area, price_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        if state.protocol.is_some() {
            let fitted = state.fitted_area(image_area);
            if let Some(protocol) = state.protocol.as_mut() {
                StatefulImage::default().render(fitted, buf, protocol);
            }
        } else {
            let placeholder = match state.status {
                PreviewStatus::Unavailable(_) => "image unavailable",
                PreviewStatus::Pending | PreviewStatus::Ready => "…",
            };
            Paragraph::new(placeholder)
                .style(self.style.placeholder)
                .render(image_area, buf);
        }

        Line::styled(self.record.size_label(), self.style.size).render(size_area, buf);
        Line::styled(self.record.price_label(), self.style.price).render(price_area, buf);
    }
}
