use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    // Core actions (translated to core::Action by the event loop)
    ForceQuit,   // Ctrl+C
    Submit,      // Enter
    Random,      // Ctrl+R
    Reset,       // Ctrl+L

    // TUI-local events (handled directly in TUI)
    Escape,
    InputChar(char),
    Paste(String),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    CursorUp,
    CursorDown,
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).ok()? {
        return None;
    }
    translate(event::read().ok()?)
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            // Ignore release events reported by the keyboard enhancement protocol
            if key_event.kind == KeyEventKind::Release {
                return None;
            }
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (KeyModifiers::CONTROL, KeyCode::Char('r')) => Some(TuiEvent::Random),
                (KeyModifiers::CONTROL, KeyCode::Char('l')) => Some(TuiEvent::Reset),
                (KeyModifiers::CONTROL, _) => None,
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Delete) => Some(TuiEvent::Delete),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
                (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
                (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
                (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(_) => Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row)),
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseButton, MouseEvent};

    fn key(modifiers: KeyModifiers, code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_control_shortcuts() {
        assert_eq!(translate(key(KeyModifiers::CONTROL, KeyCode::Char('c'))), Some(TuiEvent::ForceQuit));
        assert_eq!(translate(key(KeyModifiers::CONTROL, KeyCode::Char('r'))), Some(TuiEvent::Random));
        assert_eq!(translate(key(KeyModifiers::CONTROL, KeyCode::Char('l'))), Some(TuiEvent::Reset));
        assert_eq!(translate(key(KeyModifiers::CONTROL, KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_plain_and_shifted_chars_are_input() {
        assert_eq!(translate(key(KeyModifiers::NONE, KeyCode::Char('a'))), Some(TuiEvent::InputChar('a')));
        assert_eq!(translate(key(KeyModifiers::SHIFT, KeyCode::Char('A'))), Some(TuiEvent::InputChar('A')));
    }

    #[test]
    fn test_mouse_click() {
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 9,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate(click), Some(TuiEvent::MouseClick(4, 9)));
    }
}
