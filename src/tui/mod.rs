//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or fetch results.
//!
//! ## Fetches
//!
//! Each fetch runs in its own tokio task and reports back through an mpsc
//! channel drained once per loop iteration. Nothing cancels or orders them.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::api::{CountrySource, FetchMode, fetch};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{CountryListState, SearchBox, SearchEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Text editing in the search box. Esc switches to Browse.
    Input,
    /// Navigate cards with arrow keys. Typing auto-switches to Input.
    Browse,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub country_list: CountryListState,
    pub search_box: SearchBox,
    pub input_mode: InputMode,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            country_list: CountryListState::new(),
            search_box: SearchBox::new(),
            input_mode: InputMode::Input, // User expects to type immediately
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock, // Non-blinking: continuous redraws reset the blink timer
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// What the event loop should do after an event was handled.
enum Flow {
    Continue,
    Quit,
}

pub fn run(config: ResolvedConfig, source: Arc<dyn CountrySource>) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from fetch tasks
    let (tx, rx) = mpsc::channel();

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    'event_loop: loop {
        tui.search_box.dimmed = matches!(tui.input_mode, InputMode::Browse);

        if app.is_loading {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Short poll while the spinner runs, long poll when idle
        let timeout = if app.is_loading {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let frame_area = terminal.get_frame().area();
            if let Flow::Quit = handle_event(event, &mut app, &mut tui, frame_area, &source, &tx) {
                break 'event_loop;
            }
        }

        // Handle fetch results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if let Flow::Quit = dispatch(action, &mut app, &mut tui, &source, &tx) {
                break 'event_loop;
            }
        }
    }

    ratatui::restore();
    info!("Terra shutting down");
    Ok(())
}

/// Translate one terminal event into actions.
fn handle_event(
    event: TuiEvent,
    app: &mut App,
    tui: &mut TuiState,
    frame_area: ratatui::layout::Rect,
    source: &Arc<dyn CountrySource>,
    tx: &mpsc::Sender<Action>,
) -> Flow {
    match event {
        TuiEvent::Resize => Flow::Continue,
        TuiEvent::ForceQuit => dispatch(Action::Quit, app, tui, source, tx),
        TuiEvent::Random => dispatch(Action::RandomCountry, app, tui, source, tx),
        TuiEvent::Reset => {
            tui.input_mode = InputMode::Input;
            dispatch(Action::Reset, app, tui, source, tx)
        }
        TuiEvent::MouseClick(_col, row) => {
            if let Some(idx) = ui::hit_test_country(row, frame_area, tui) {
                tui.input_mode = InputMode::Browse;
                tui.country_list.selected_index = Some(idx);
            }
            Flow::Continue
        }
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.country_list.handle_event(&event);
            Flow::Continue
        }
        _ => match tui.input_mode {
            InputMode::Input => handle_input_mode(event, app, tui, source, tx),
            InputMode::Browse => handle_browse_mode(event, app, tui, source, tx),
        },
    }
}

fn handle_input_mode(
    event: TuiEvent,
    app: &mut App,
    tui: &mut TuiState,
    source: &Arc<dyn CountrySource>,
    tx: &mpsc::Sender<Action>,
) -> Flow {
    match event {
        TuiEvent::Escape => {
            tui.input_mode = InputMode::Browse;
            if tui.country_list.selected_index.is_none() && !app.countries.is_empty() {
                tui.country_list.selected_index = Some(0);
                tui.country_list.scroll_to_selected();
            }
            Flow::Continue
        }
        // Arrow keys move through the list even while typing
        TuiEvent::CursorUp | TuiEvent::CursorDown => {
            tui.country_list.handle_event(&event);
            Flow::Continue
        }
        _ => match tui.search_box.handle_event(&event) {
            Some(SearchEvent::Changed(text)) => {
                dispatch(Action::SearchTextChanged(text), app, tui, source, tx)
            }
            Some(SearchEvent::Submit) => dispatch(Action::Search, app, tui, source, tx),
            Some(SearchEvent::CursorMoved) | None => Flow::Continue,
        },
    }
}

fn handle_browse_mode(
    event: TuiEvent,
    app: &mut App,
    tui: &mut TuiState,
    source: &Arc<dyn CountrySource>,
    tx: &mpsc::Sender<Action>,
) -> Flow {
    match event {
        TuiEvent::CursorUp | TuiEvent::CursorDown => {
            tui.country_list.handle_event(&event);
            Flow::Continue
        }
        TuiEvent::InputChar('m') => match tui.country_list.selected_index {
            Some(idx) => dispatch(Action::OpenMap(idx), app, tui, source, tx),
            None => Flow::Continue,
        },
        TuiEvent::InputChar('w') => match tui.country_list.selected_index {
            Some(idx) => dispatch(Action::OpenEncyclopedia(idx), app, tui, source, tx),
            None => Flow::Continue,
        },
        // Enter or typing returns to the search box
        TuiEvent::Submit => {
            tui.input_mode = InputMode::Input;
            Flow::Continue
        }
        TuiEvent::InputChar(_) | TuiEvent::Paste(_) => {
            tui.input_mode = InputMode::Input;
            handle_input_mode(event, app, tui, source, tx)
        }
        _ => Flow::Continue,
    }
}

/// Run an action through the reducer and perform the resulting effect.
fn dispatch(
    action: Action,
    app: &mut App,
    tui: &mut TuiState,
    source: &Arc<dyn CountrySource>,
    tx: &mpsc::Sender<Action>,
) -> Flow {
    let replaces_results = matches!(
        action,
        Action::FetchSucceeded(_) | Action::FetchFailed(_) | Action::Reset
    );

    let effect = update(app, action);

    if replaces_results {
        tui.country_list.reset(app.countries.len());
    }
    // Reset clears the query in core; mirror it into the widget
    if tui.search_box.text() != app.search_text {
        tui.search_box.set_text(&app.search_text);
    }

    match effect {
        Effect::None => Flow::Continue,
        Effect::Quit => Flow::Quit,
        Effect::Fetch(mode) => {
            spawn_fetch(source.clone(), mode, tx.clone());
            Flow::Continue
        }
        Effect::OpenUrl(url) => {
            open_url(app, &url);
            Flow::Continue
        }
    }
}

fn open_url(app: &mut App, url: &str) {
    info!("Opening {}", url);
    match open::that_detached(url) {
        Ok(()) => app.status_message = format!("Opened {url}"),
        Err(e) => {
            warn!("Failed to open {}: {}", url, e);
            app.status_message = format!("Could not open link: {e}");
        }
    }
}

fn spawn_fetch(source: Arc<dyn CountrySource>, mode: FetchMode, tx: mpsc::Sender<Action>) {
    info!("Spawning fetch: {:?}", mode);
    tokio::spawn(async move {
        let action = match fetch(source.as_ref(), &mode).await {
            Ok(countries) => Action::FetchSucceeded(countries),
            Err(e) => Action::FetchFailed(e),
        };
        if tx.send(action).is_err() {
            warn!("Failed to send fetch result for {:?}: receiver dropped", mode);
        }
    });
}
