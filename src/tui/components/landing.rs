//! # Landing Page Component
//!
//! Shown in place of the list when there are no countries to display.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct LandingPage {
    /// A fetch just came back empty (or failed)
    pub no_results: bool,
}

impl LandingPage {
    pub fn new(no_results: bool) -> Self {
        Self { no_results }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let hint = if self.no_results {
            "No results"
        } else {
            "Type a country name and press Enter, or Ctrl+R for a random one"
        };
        vec![
            Line::from(Span::styled(
                "Country Information",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
            Line::from(Span::styled(
                format!("v{}", env!("CARGO_PKG_VERSION")),
                Style::default().fg(Color::DarkGray),
            )),
        ]
    }
}

impl Component for LandingPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = self.lines();
        let [centered] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), centered);
    }
}
