//! # SearchBox Component
//!
//! Single-line text field for the country name query.
//!
//! ## Responsibilities
//!
//! - Capture text input
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Handle submission (Enter)
//! - Scroll horizontally when the query is wider than the box
//!
//! The buffer is internal state, mirrored into `App::search_text` by the
//! event loop on every `Changed` event. When the app clears its search text
//! (Reset), the loop pushes the new value back with [`SearchBox::set_text`].
//! Submitting does not clear the buffer.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Columns taken by the left and right borders.
const HORIZONTAL_OVERHEAD: u16 = 2;

const PLACEHOLDER: &str = "Enter country name...";

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// User pressed Enter
    Submit,
    /// Buffer content changed
    Changed(String),
    /// Cursor moved without changing content
    CursorMoved,
}

/// Single-line query input.
///
/// # Props
///
/// - `dimmed`: rendered faded while the list has keyboard focus
pub struct SearchBox {
    buffer: String,
    /// Byte offset of the cursor in `buffer`
    cursor: usize,
    /// Display columns scrolled off the left edge
    scroll: usize,
    pub dimmed: bool,
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            scroll: 0,
            dimmed: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Replace the buffer, moving the cursor to the end.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = self.buffer.len();
        self.scroll = 0;
    }

    /// Display column of the cursor relative to the start of the buffer.
    fn cursor_column(&self) -> usize {
        self.buffer[..self.cursor].width()
    }

    /// Keep the cursor inside the visible window of `inner_width` columns.
    fn update_scroll(&mut self, inner_width: u16) {
        let col = self.cursor_column();
        let inner_width = usize::from(inner_width);
        if col < self.scroll {
            self.scroll = col;
        } else if inner_width > 0 && col >= self.scroll + inner_width {
            self.scroll = col + 1 - inner_width;
        }
    }

    /// The slice of the buffer starting at the scroll offset.
    fn visible_text(&self) -> &str {
        let mut skipped = 0usize;
        for (i, c) in self.buffer.char_indices() {
            if skipped >= self.scroll {
                return &self.buffer[i..];
            }
            skipped += unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        }
        ""
    }

    fn changed(&self) -> Option<SearchEvent> {
        Some(SearchEvent::Changed(self.buffer.clone()))
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(HORIZONTAL_OVERHEAD);
        self.update_scroll(inner_width);

        let border_style = if self.dimmed {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Search ");

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER)
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
        } else {
            Paragraph::new(self.visible_text())
        };
        frame.render_widget(paragraph.block(block), area);

        if !self.dimmed {
            // Bounded by inner_width, so it always fits the frame
            let offset = self
                .cursor_column()
                .saturating_sub(self.scroll)
                .min(usize::from(inner_width));
            let offset = u16::try_from(offset).unwrap_or(inner_width);
            let x = area.x.saturating_add(1).saturating_add(offset);
            frame.set_cursor_position((x, area.y.saturating_add(1)));
        }
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single line: newlines in pasted text become spaces
                let text = text.replace(['\r', '\n'], " ");
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                SearchEvent::CursorMoved
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                SearchEvent::CursorMoved
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                SearchEvent::CursorMoved
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                SearchEvent::CursorMoved
            }),
            TuiEvent::Submit => Some(SearchEvent::Submit),
            _ => None,
        }
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Position;

    fn typed(text: &str) -> SearchBox {
        let mut search = SearchBox::new();
        for c in text.chars() {
            search.handle_event(&TuiEvent::InputChar(c));
        }
        search
    }

    #[test]
    fn test_handle_input() {
        let mut search = SearchBox::new();

        let res = search.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(res, Some(SearchEvent::Changed("a".into())));

        let res = search.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(res, Some(SearchEvent::Changed("ab".into())));

        let res = search.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(SearchEvent::Changed("a".into())));
        assert_eq!(search.text(), "a");
    }

    #[test]
    fn test_submit_keeps_buffer() {
        let mut search = typed("peru");
        assert_eq!(search.handle_event(&TuiEvent::Submit), Some(SearchEvent::Submit));
        assert_eq!(search.text(), "peru");
    }

    #[test]
    fn test_editing_in_the_middle() {
        let mut search = typed("chle");
        search.handle_event(&TuiEvent::CursorLeft);
        search.handle_event(&TuiEvent::CursorLeft);
        search.handle_event(&TuiEvent::InputChar('i'));
        assert_eq!(search.text(), "chile");

        search.handle_event(&TuiEvent::CursorHome);
        search.handle_event(&TuiEvent::Delete);
        assert_eq!(search.text(), "hile");
    }

    #[test]
    fn test_multibyte_backspace() {
        let mut search = typed("Curaçao");
        search.handle_event(&TuiEvent::CursorLeft);
        search.handle_event(&TuiEvent::CursorLeft);
        search.handle_event(&TuiEvent::Backspace);
        assert_eq!(search.text(), "Curaao");
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut search = SearchBox::new();
        let res = search.handle_event(&TuiEvent::Paste("south\nafrica".into()));
        assert_eq!(res, Some(SearchEvent::Changed("south africa".into())));
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let mut search = SearchBox::new();
        assert_eq!(search.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_set_text_clears() {
        let mut search = typed("brazil");
        search.set_text("");
        assert_eq!(search.text(), "");
        assert_eq!(search.handle_event(&TuiEvent::CursorLeft), None);
    }

    #[test]
    fn test_scrolls_to_keep_cursor_visible() {
        let mut search = typed("the united kingdom of great britain");
        search.update_scroll(10);
        assert!(search.scroll > 0);
        assert!(search.visible_text().ends_with("britain"));

        search.handle_event(&TuiEvent::CursorHome);
        search.update_scroll(10);
        assert_eq!(search.scroll, 0);
    }

    #[test]
    fn test_render_query_wider_than_u16_columns() {
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut search = SearchBox::new();
        search.handle_event(&TuiEvent::Paste("a".repeat(70_000)));

        terminal.draw(|f| search.render(f, f.area())).unwrap();

        // 78 inner columns: the cursor sits in the last one
        assert_eq!(search.scroll, 70_000 + 1 - 78);
        assert_eq!(search.visible_text().len(), 77);
        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(78, 1));

        search.handle_event(&TuiEvent::CursorHome);
        terminal.draw(|f| search.render(f, f.area())).unwrap();
        assert_eq!(search.scroll, 0);
        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(1, 1));
    }

    #[test]
    fn test_render_shows_placeholder() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut search = SearchBox::new();

        terminal.draw(|f| search.render(f, f.area())).unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Search"));
        assert!(text.contains("Enter country name..."));
    }
}
