use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::InputMode;
use crate::tui::component::Component;

/// Bottom row listing the shortcuts available in the current mode.
pub struct HelpBar {
    pub mode: InputMode,
}

impl HelpBar {
    fn bindings(&self) -> &'static [(&'static str, &'static str)] {
        match self.mode {
            InputMode::Input => &[
                ("Enter", "Search"),
                ("^R", "Random"),
                ("^L", "Reset"),
                ("Esc", "Browse"),
                ("^C", "Quit"),
            ],
            InputMode::Browse => &[
                ("↑↓", "Select"),
                ("m", "Map"),
                ("w", "Wikipedia"),
                ("^R", "Random"),
                ("^L", "Reset"),
                ("^C", "Quit"),
            ],
        }
    }
}

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(Color::DarkGray);

        let spans: Vec<Span> = self
            .bindings()
            .iter()
            .flat_map(|(key, label)| {
                [
                    Span::styled(format!(" {key} "), key_style),
                    Span::styled(format!("{label} "), label_style),
                ]
            })
            .collect();

        frame.render_widget(Line::from(spans), area);
    }
}
