//! Size dropdown.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, StatefulWidget, Widget},
};

use crate::domain::entities::SizeFilter;

/// Dropdown options plus the applied and highlighted entries.
#[derive(Debug, Clone)]
pub struct SizeSelectorState {
    options: Vec<SizeFilter>,
    selected: usize,
    list_state: ListState,
    open: bool,
}

impl SizeSelectorState {
    /// Creates a closed selector on the first option.
    #[must_use]
    pub fn new(options: Vec<SizeFilter>) -> Self {
        let options = if options.is_empty() {
            vec![SizeFilter::All]
        } else {
            options
        };

        Self {
            options,
            selected: 0,
            list_state: ListState::default().with_selected(Some(0)),
            open: false,
        }
    }

    #[must_use]
    pub fn options(&self) -> &[SizeFilter] {
        &self.options
    }

    /// Returns the applied filter.
    #[must_use]
    pub fn selected(&self) -> &SizeFilter {
        &self.options[self.selected]
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Marks `filter` as applied if it is one of the options.
    pub fn select(&mut self, filter: &SizeFilter) {
        if let Some(index) = self.options.iter().position(|option| option == filter) {
            self.selected = index;
            self.list_state.select(Some(index));
        }
    }

    /// Opens the dropdown with the applied entry highlighted.
    pub fn open(&mut self) {
        self.open = true;
        self.list_state.select(Some(self.selected));
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn highlight_next(&mut self) {
        let current = self.list_state.selected().unwrap_or(self.selected);
        self.list_state
            .select(Some((current + 1).min(self.options.len() - 1)));
    }

    pub fn highlight_previous(&mut self) {
        let current = self.list_state.selected().unwrap_or(self.selected);
        self.list_state.select(Some(current.saturating_sub(1)));
    }

    /// Applies the highlighted entry and closes the dropdown.
    pub fn confirm(&mut self) -> SizeFilter {
        if let Some(index) = self.list_state.selected() {
            self.selected = index.min(self.options.len() - 1);
        }
        self.open = false;
        self.selected().clone()
    }

    /// Applies the next option, wrapping around.
    pub fn cycle_next(&mut self) -> SizeFilter {
        self.selected = (self.selected + 1) % self.options.len();
        self.list_state.select(Some(self.selected));
        self.selected().clone()
    }

    /// Applies the previous option, wrapping around.
    pub fn cycle_previous(&mut self) -> SizeFilter {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.options.len() - 1);
        self.list_state.select(Some(self.selected));
        self.selected().clone()
    }
}

/// Closed dropdown line, e.g. `Select Size  [ All ▾ ]`.
pub struct SizeSelector<'a> {
    label: &'a str,
}

impl<'a> SizeSelector<'a> {
    #[must_use]
    pub const fn new(label: &'a str) -> Self {
        Self { label }
    }
}

impl StatefulWidget for SizeSelector<'_> {
    type State = SizeSelectorState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let accent = if state.open {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let arrow = if state.open { "▴" } else { "▾" };
        let line = Line::from(vec![
            Span::styled(format!("{}  ", self.label), Style::default().fg(Color::Gray)),
            Span::styled(format!("[ {} {arrow} ]", state.selected()), accent),
        ]);
        line.render(area, buf);
    }
}

/// Popup list shown while the dropdown is open.
pub struct SizeSelectorPopup;

impl SizeSelectorPopup {
    /// Height the popup needs for `options` entries, borders included.
    #[must_use]
    pub fn height(options: usize) -> u16 {
        u16::try_from(options).unwrap_or(u16::MAX).saturating_add(2)
    }
}

impl StatefulWidget for SizeSelectorPopup {
    type State = SizeSelectorState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Size ");

        let applied = state.selected;
        let items: Vec<ListItem> = state
            .options
            .iter()
            .enumerate()
            .map(|(index, option)| {
                let marker = if index == applied { "● " } else { "  " };
                ListItem::new(format!("{marker}{option}"))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray));

        StatefulWidget::render(list, area, buf, &mut state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> SizeSelectorState {
        SizeSelectorState::new(vec![
            SizeFilter::All,
            SizeFilter::from("S"),
            SizeFilter::from("M"),
        ])
    }

    #[test]
    fn test_starts_on_all() {
        let selector = state();

        assert_eq!(selector.selected(), &SizeFilter::All);
        assert!(!selector.is_open());
    }

    #[test]
    fn test_empty_options_fall_back_to_all() {
        let selector = SizeSelectorState::new(Vec::new());

        assert_eq!(selector.options(), &[SizeFilter::All]);
    }

    #[test]
    fn test_highlight_and_confirm() {
        let mut selector = state();
        selector.open();
        selector.highlight_next();
        selector.highlight_next();
        selector.highlight_next();

        let chosen = selector.confirm();

        assert_eq!(chosen, SizeFilter::from("M"));
        assert!(!selector.is_open());
    }

    #[test]
    fn test_close_keeps_applied_filter() {
        let mut selector = state();
        selector.open();
        selector.highlight_next();
        selector.close();

        assert_eq!(selector.selected(), &SizeFilter::All);
    }

    #[test]
    fn test_select_known_filter() {
        let mut selector = state();

        selector.select(&SizeFilter::from("M"));
        selector.select(&SizeFilter::from("XXL"));

        assert_eq!(selector.selected(), &SizeFilter::from("M"));
    }

    #[test]
    fn test_cycle_wraps() {
        let mut selector = state();

        assert_eq!(selector.cycle_previous(), SizeFilter::from("M"));
        assert_eq!(selector.cycle_next(), SizeFilter::All);
        assert_eq!(selector.cycle_next(), SizeFilter::from("S"));
    }

    #[test]
    fn test_closed_line_shows_selection() {
        let mut selector = state();
        selector.cycle_next();
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);

        SizeSelector::new("Size").render(area, &mut buf, &mut selector);

        let text: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(text.starts_with("Size  [ S ▾ ]"));
    }

    #[test]
    fn test_popup_marks_applied_option() {
        let mut selector = state();
        selector.open();
        let area = Rect::new(0, 0, 12, SizeSelectorPopup::height(3));
        let mut buf = Buffer::empty(area);

        SizeSelectorPopup.render(area, &mut buf, &mut selector);

        assert_eq!(buf[(1, 1)].symbol(), "●");
        assert_eq!(buf[(3, 1)].symbol(), "A");
        assert_eq!(buf[(3, 2)].symbol(), "S");
    }
}
