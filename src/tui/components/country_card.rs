use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};

use crate::core::country::Country;

/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;
/// Width of the label column, including the trailing gap.
const LABEL_WIDTH: usize = 12;

/// A stateless component that renders one country as a bordered card.
///
/// `CountryCard` is a **transient component**: it's created fresh each frame
/// by the parent `CountryList`, which tracks selection persistently.
///
/// Every card has the same height (one row per field plus borders), so the
/// list can compute scroll positions without rendering.
#[derive(Clone, Copy)]
pub struct CountryCard<'a> {
    pub country: &'a Country,
    pub is_selected: bool,
}

impl<'a> CountryCard<'a> {
    pub fn new(country: &'a Country, is_selected: bool) -> Self {
        Self {
            country,
            is_selected,
        }
    }

    /// Rows of label/value pairs shown inside the card.
    fn fields(&self) -> [(&'static str, &'a str); 7] {
        let c = self.country;
        [
            ("Continents", c.continents.as_str()),
            ("Capital", c.capital.as_str()),
            ("Currency", c.currency.as_str()),
            ("Language", c.language.as_str()),
            ("Population", c.population.as_str()),
            ("Flag", c.flag.as_str()),
            ("Map", c.location.as_str()),
        ]
    }

    /// Rendered height of any card, borders included.
    pub const fn height() -> u16 {
        7 + VERTICAL_OVERHEAD
    }
}

impl<'a> Widget for CountryCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border_style, title_style) = if self.is_selected {
            (
                Style::default().fg(Color::Cyan),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
        } else {
            (
                Style::default().fg(Color::Green).add_modifier(Modifier::DIM),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )
        };

        let label_style = Style::default().fg(Color::DarkGray);
        let lines: Vec<Line> = self
            .fields()
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{label:<LABEL_WIDTH$}"), label_style),
                    Span::raw(value),
                ])
            })
            .collect();

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Span::styled(format!(" {} ", self.country.name), title_style))
            .title_bottom(Line::from(format!(" {} ", self.country.id)).right_aligned())
            .padding(Padding::horizontal(1));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
