//! Gallery screen: title, size dropdown, product cards and status bar.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, StatefulWidget, Widget},
};

use crate::application::{GalleryView, NO_DATA_NOTICE};
use crate::domain::entities::SizeFilter;
use crate::presentation::events::{EventHandler, KeyAction};
use crate::presentation::widgets::{
    ImageManager, ProductCard, ProductImage, SizeSelector, SizeSelectorPopup, SizeSelectorState,
    StatusBar,
};

const SELECTOR_LABEL: &str = "Select Size";
const POPUP_WIDTH: u16 = 24;
const KEY_HINTS: &str = "↑↓ scroll  ←→ size  f filter  q quit";

/// Decode outcome per resolved URL.
pub type DecodedPreviews = HashMap<String, Result<Arc<image::DynamicImage>, String>>;

/// Result of gallery key handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryKeyResult {
    /// Leave the application.
    Quit,
    /// Apply a new size filter.
    FilterSelected(SizeFilter),
    /// Key changed screen-local state only.
    Consumed,
    /// Key is unbound here.
    Ignored,
}

/// Screen-local gallery state.
pub struct GalleryScreenState {
    selector: SizeSelectorState,
    scroll: usize,
    previews: Vec<ProductImage>,
    image_height: u16,
}

impl GalleryScreenState {
    /// Builds state for a freshly loaded view.
    ///
    /// `decoded` holds decode results keyed by resolved URL; rows whose URL
    /// is missing from it stay as placeholders.
    #[must_use]
    pub fn new(view: &GalleryView, decoded: &DecodedPreviews, image_height: u16) -> Self {
        let previews = view
            .table()
            .resolved_urls()
            .into_iter()
            .map(|url| {
                let mut preview = ProductImage::new(url);
                match decoded.get(&preview.url) {
                    Some(Ok(image)) => preview.set_loaded(image.clone()),
                    Some(Err(reason)) => preview.set_unavailable(reason.clone()),
                    None => {}
                }
                preview
            })
            .collect();

        let mut selector = SizeSelectorState::new(view.filter_options());
        selector.select(view.filter());

        Self {
            selector,
            scroll: 0,
            previews,
            image_height: image_height.max(1),
        }
    }

    #[must_use]
    pub const fn scroll(&self) -> usize {
        self.scroll
    }

    #[must_use]
    pub const fn selector(&self) -> &SizeSelectorState {
        &self.selector
    }

    /// Handles a key against `visible` rows of the current view.
    pub fn handle_key(&mut self, key: &KeyEvent, visible: usize) -> GalleryKeyResult {
        let last = visible.saturating_sub(1);

        match EventHandler::gallery_action(key, self.selector.is_open()) {
            KeyAction::Quit => GalleryKeyResult::Quit,
            KeyAction::OpenSelector => {
                self.selector.open();
                GalleryKeyResult::Consumed
            }
            KeyAction::CloseSelector => {
                self.selector.close();
                GalleryKeyResult::Consumed
            }
            KeyAction::ConfirmSelection => self.filter_selected(|s| s.confirm()),
            KeyAction::PreviousFilter => self.filter_selected(SizeSelectorState::cycle_previous),
            KeyAction::NextFilter => self.filter_selected(SizeSelectorState::cycle_next),
            KeyAction::Up if self.selector.is_open() => {
                self.selector.highlight_previous();
                GalleryKeyResult::Consumed
            }
            KeyAction::Down if self.selector.is_open() => {
                self.selector.highlight_next();
                GalleryKeyResult::Consumed
            }
            KeyAction::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                GalleryKeyResult::Consumed
            }
            KeyAction::Down => {
                self.scroll = (self.scroll + 1).min(last);
                GalleryKeyResult::Consumed
            }
            KeyAction::Top => {
                self.scroll = 0;
                GalleryKeyResult::Consumed
            }
            KeyAction::Bottom => {
                self.scroll = last;
                GalleryKeyResult::Consumed
            }
            KeyAction::None => GalleryKeyResult::Ignored,
        }
    }

    fn filter_selected(
        &mut self,
        apply: impl FnOnce(&mut SizeSelectorState) -> SizeFilter,
    ) -> GalleryKeyResult {
        let filter = apply(&mut self.selector);
        self.scroll = 0;
        GalleryKeyResult::FilterSelected(filter)
    }

    fn card_height(&self) -> u16 {
        ProductCard::height(self.image_height)
    }
}

/// Renders a ready gallery.
pub struct GalleryScreen<'a> {
    title: &'a str,
    view: &'a GalleryView,
    images: &'a ImageManager,
}

impl<'a> GalleryScreen<'a> {
    /// Creates the screen over a ready view.
    #[must_use]
    pub const fn new(title: &'a str, view: &'a GalleryView, images: &'a ImageManager) -> Self {
        Self {
            title,
            view,
            images,
        }
    }

    fn render_cards(&self, area: Rect, buf: &mut Buffer, state: &mut GalleryScreenState) {
        let rows = self.view.visible_rows();
        if rows.is_empty() {
            Paragraph::new(NO_DATA_NOTICE)
                .style(Style::default().fg(Color::DarkGray))
                .render(area, buf);
            return;
        }

        let card_height = state.card_height();
        let fit = usize::from((area.height / card_height).max(1));
        state.scroll = state.scroll.min(rows.len() - 1);
        let window = &rows[state.scroll..(state.scroll + fit).min(rows.len())];

        let visible: HashSet<usize> = rows.iter().map(|row| row.index).collect();
        let mut filtered: Vec<&mut ProductImage> = state
            .previews
            .iter_mut()
            .enumerate()
            .filter(|(index, _)| visible.contains(index))
            .map(|(_, preview)| preview)
            .collect();
        self.images
            .sync_window(&mut filtered, state.scroll, state.scroll + fit - 1);

        let mut y = area.y;
        for row in window {
            let height = card_height.min(area.bottom().saturating_sub(y));
            if height == 0 {
                break;
            }
            let card_area = Rect::new(area.x, y, area.width, height);
            if let Some(preview) = state.previews.get_mut(row.index) {
                ProductCard::new(row.record).render(card_area, buf, preview);
            }
            y = y.saturating_add(height);
        }
    }

    fn status_bar(&self, state: &GalleryScreenState) -> StatusBar {
        if let Some(failure) = self.view.failure() {
            return StatusBar::error(failure).hints(KEY_HINTS);
        }

        let visible = self.view.visible_rows().len();
        if visible == 0 {
            return StatusBar::warning(NO_DATA_NOTICE).hints(KEY_HINTS);
        }

        let total = self.view.table().len();
        let position = state.scroll + 1;
        StatusBar::info(format!(
            "{position}/{visible} shown · {total} items · size: {}",
            self.view.filter()
        ))
        .hints(KEY_HINTS)
    }
}

impl StatefulWidget for GalleryScreen<'_> {
    type State = GalleryScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let notice_height = u16::from(self.view.failure().is_some());
        let [title_area, selector_area, notice_area, body_area, status_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(notice_height),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .areas(area);

        Line::styled(
            self.title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
        .render(title_area, buf);

        SizeSelector::new(SELECTOR_LABEL).render(selector_area, buf, &mut state.selector);

        if let Some(failure) = self.view.failure() {
            Line::styled(failure, Style::default().fg(Color::Red)).render(notice_area, buf);
        }

        self.render_cards(body_area, buf, state);

        (&self.status_bar(state)).render(status_area, buf);

        if state.selector.is_open() {
            let offset = u16::try_from(SELECTOR_LABEL.len()).unwrap_or(0) + 2;
            let popup_height = SizeSelectorPopup::height(state.selector.options().len());
            let x = selector_area.x + offset.min(selector_area.width);
            let y = selector_area.bottom();
            let popup = Rect::new(
                x,
                y,
                POPUP_WIDTH.min(area.right().saturating_sub(x)),
                popup_height.min(area.bottom().saturating_sub(y)),
            );
            SizeSelectorPopup.render(popup, buf, &mut state.selector);
        }
    }
}
