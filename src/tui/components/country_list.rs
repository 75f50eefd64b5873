//! # CountryList Component
//!
//! Scrollable view of the current result set.
//!
//! ## Responsibilities
//!
//! - Display one `CountryCard` per country
//! - Manage scrolling and keyboard selection
//! - Hit testing for mouse clicks
//!
//! ## Architecture
//!
//! `CountryList` is a transient component (created each frame) that wraps
//! `&'a mut CountryListState` (persistent state) and the country slice (props).
//! Cards have a fixed height, so positions are computed arithmetically
//! rather than cached.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::country::Country;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::country_card::CountryCard;
use crate::tui::event::TuiEvent;

/// Scroll and selection state for the country list.
/// Must be persisted in the parent TuiState.
pub struct CountryListState {
    pub scroll_state: ScrollViewState,
    /// Currently selected card (keyboard navigation or click)
    pub selected_index: Option<usize>,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    /// Number of items at the last render
    pub item_count: usize,
}

impl Default for CountryListState {
    fn default() -> Self {
        Self::new()
    }
}

impl CountryListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            selected_index: None,
            viewport_height: 0,
            item_count: 0,
        }
    }

    fn content_height(&self) -> u16 {
        (self.item_count as u16).saturating_mul(CountryCard::height())
    }

    fn max_scroll(&self) -> u16 {
        self.content_height().saturating_sub(self.viewport_height)
    }

    /// True when some content is below the viewport.
    pub fn has_unseen_content(&self) -> bool {
        self.scroll_state.offset().y < self.max_scroll()
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.max_scroll();
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Scroll the viewport so the selected card is fully visible.
    /// If the card is taller than the viewport, align its top edge.
    pub fn scroll_to_selected(&mut self) {
        let Some(idx) = self.selected_index else {
            return;
        };
        let item_top = idx as u16 * CountryCard::height();
        let item_bottom = item_top + CountryCard::height();
        let offset_y = self.scroll_state.offset().y;

        if item_top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: item_top });
        } else if item_bottom > offset_y + self.viewport_height {
            let new_y = item_bottom.saturating_sub(self.viewport_height).min(item_top);
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }

    pub fn select_previous(&mut self) {
        if self.item_count == 0 {
            return;
        }
        let idx = self
            .selected_index
            .map(|i| i.saturating_sub(1))
            .unwrap_or(self.item_count - 1);
        self.selected_index = Some(idx);
        self.scroll_to_selected();
    }

    pub fn select_next(&mut self) {
        if self.item_count == 0 {
            return;
        }
        let idx = self
            .selected_index
            .map(|i| (i + 1).min(self.item_count - 1))
            .unwrap_or(0);
        self.selected_index = Some(idx);
        self.scroll_to_selected();
    }

    /// Forget selection and scroll position (new result set).
    pub fn reset(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.selected_index = None;
        self.scroll_state = ScrollViewState::default();
    }

    /// Given a row inside the list area, find which card (if any) is there.
    pub fn hit_test(&self, row_in_area: u16) -> Option<usize> {
        let content_y = row_in_area + self.scroll_state.offset().y;
        let idx = (content_y / CountryCard::height()) as usize;
        (idx < self.item_count).then_some(idx)
    }
}

impl EventHandler for CountryListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
            }
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.clamp_scroll();
            }
            TuiEvent::CursorUp => self.select_previous(),
            TuiEvent::CursorDown => self.select_next(),
            _ => return None,
        }
        Some(())
    }
}

/// Scrollable country view component.
/// Created fresh each frame with references to state and data.
pub struct CountryList<'a> {
    pub state: &'a mut CountryListState,
    pub countries: &'a [Country],
}

impl<'a> CountryList<'a> {
    pub fn new(state: &'a mut CountryListState, countries: &'a [Country]) -> Self {
        Self { state, countries }
    }
}

impl<'a> Component for CountryList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area
        let card_height = CountryCard::height();

        if self.state.item_count != self.countries.len() {
            self.state.reset(self.countries.len());
        }
        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        let total_height = self.state.content_height();
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        // Only render cards that intersect the viewport
        let offset = self.state.scroll_state.offset().y;
        let first = (offset / card_height) as usize;
        let last = ((offset + area.height) / card_height) as usize + 1;

        for (i, country) in self
            .countries
            .iter()
            .enumerate()
            .take(last.min(self.countries.len()))
            .skip(first)
        {
            let rect = Rect::new(0, i as u16 * card_height, content_width, card_height);
            let is_selected = self.state.selected_index == Some(i);
            scroll_view.render_widget(CountryCard::new(country, is_selected), rect);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
