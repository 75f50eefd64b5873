use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CountryList, HelpBar, LandingPage, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the search box including borders.
const SEARCH_HEIGHT: u16 = 3;

/// Screen regions, top to bottom.
pub struct ScreenLayout {
    pub title: Rect,
    pub search: Rect,
    pub main: Rect,
    pub help: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    use Constraint::{Length, Min};
    let [title, search, main, help] =
        Layout::vertical([Length(1), Length(SEARCH_HEIGHT), Min(0), Length(1)]).areas(area);
    ScreenLayout {
        title,
        search,
        main,
        help,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let layout = screen_layout(frame.area());

    // Main area - results OR empty state
    if app.countries.is_empty() {
        LandingPage::new(app.no_results && !app.is_loading).render(frame, layout.main);
    } else {
        CountryList::new(&mut tui.country_list, &app.countries).render(frame, layout.main);
    }

    // Title bar reads scroll state, so it renders after the list
    let has_unseen_content = !app.countries.is_empty() && tui.country_list.has_unseen_content();
    TitleBar::new(
        app.status_message.clone(),
        app.is_loading,
        spinner_frame,
        has_unseen_content,
    )
    .render(frame, layout.title);

    tui.search_box.render(frame, layout.search);

    HelpBar { mode: tui.input_mode }.render(frame, layout.help);
}

/// Hit test: given a screen Y coordinate, find which country card (if any) is there.
pub fn hit_test_country(screen_y: u16, frame_area: Rect, tui: &TuiState) -> Option<usize> {
    let main = screen_layout(frame_area).main;
    if screen_y < main.y || screen_y >= main.y + main.height {
        return None;
    }
    tui.country_list.hit_test(screen_y - main.y)
}
