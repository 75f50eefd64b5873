//! # TitleBar Component
//!
//! Top status bar showing application state and notifications.
//!
//! ## Responsibilities
//!
//! - Display the app name
//! - Display status messages (e.g., "Searching...", "3 countries")
//! - Show a spinner while a fetch is outstanding
//! - Show "↓ More" indicator when there's content below the scroll position
//!
//! ## Conditional Formatting
//!
//! 1. **Loading**: `"Terra ⠹ | Searching \"fr\"..."`
//! 2. **Unseen content**: `"Terra | 12 countries | ↓ More"`
//! 3. **Status message**: `"Terra | 12 countries"`
//! 4. **Default**: `"Terra"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Top status bar component. Stateless: all fields are props.
pub struct TitleBar {
    pub status_message: String,
    pub is_loading: bool,
    pub spinner_frame: usize,
    pub has_unseen_content: bool,
}

impl TitleBar {
    pub fn new(
        status_message: String,
        is_loading: bool,
        spinner_frame: usize,
        has_unseen_content: bool,
    ) -> Self {
        Self {
            status_message,
            is_loading,
            spinner_frame,
            has_unseen_content,
        }
    }

    fn title_text(&self) -> String {
        let mut title = String::from("Terra");
        if self.is_loading {
            title.push(' ');
            title.push(SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]);
        }
        if !self.status_message.is_empty() {
            title.push_str(" | ");
            title.push_str(&self.status_message);
        }
        if self.has_unseen_content && !self.is_loading {
            title.push_str(" | ↓ More");
        }
        title
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.is_loading {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        frame.render_widget(Span::styled(self.title_text(), style), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(mut title_bar: TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_unseen_content() {
        let text = rendered(TitleBar::new("12 countries".to_string(), false, 0, true));
        assert!(text.contains("Terra"));
        assert!(text.contains("12 countries"));
        assert!(text.contains("↓ More"));
    }

    #[test]
    fn test_title_bar_loading_shows_spinner() {
        let text = rendered(TitleBar::new("Searching...".to_string(), true, 2, true));
        assert!(text.contains('⠹'));
        assert!(text.contains("Searching..."));
        assert!(!text.contains("↓ More"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let text = rendered(TitleBar::new(String::new(), false, 0, false));
        assert!(text.starts_with("Terra"));
        assert!(!text.contains('|'));
    }
}
