//! # Actions
//!
//! Everything that can happen in Terra becomes an `Action`.
//! User presses Enter? That's `Action::Search`.
//! The provider responds? That's `Action::FetchSucceeded(records)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state and returns an `Effect` describing any I/O the
//! adapter must perform. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Fetch completions are applied in arrival order. Two overlapping fetches
//! both replace the list, so the one that resolves last is what stays on
//! screen.

use log::{error, info};

use crate::api::{FetchError, FetchMode, RawCountry};
use crate::core::country::normalize;
use crate::core::state::App;

#[derive(Debug)]
pub enum Action {
    /// The search box content changed.
    SearchTextChanged(String),
    /// Search for the current search text.
    Search,
    /// Fetch one country at random.
    RandomCountry,
    /// A fetch returned provider records.
    FetchSucceeded(Vec<RawCountry>),
    /// A fetch failed before producing records.
    FetchFailed(FetchError),
    /// Clear results and search text.
    Reset,
    /// Open the map link of the country at this index.
    OpenMap(usize),
    /// Open the encyclopedia page of the country at this index.
    OpenEncyclopedia(usize),
    Quit,
}

/// I/O requested by `update()`, performed by the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Fetch(FetchMode),
    OpenUrl(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SearchTextChanged(text) => {
            app.search_text = text;
            Effect::None
        }
        Action::Search => {
            if app.search_text.trim().is_empty() {
                return Effect::None;
            }
            app.is_loading = true;
            app.status_message = format!("Searching \"{}\"...", app.search_text);
            Effect::Fetch(FetchMode::Search(app.search_text.clone()))
        }
        Action::RandomCountry => {
            app.is_loading = true;
            app.status_message = String::from("Picking a random country...");
            Effect::Fetch(FetchMode::Random)
        }
        Action::FetchSucceeded(raw) => {
            app.is_loading = false;
            match normalize(&raw, &app.format) {
                Ok(countries) => {
                    info!("Displaying {} countries", countries.len());
                    app.status_message = match countries.len() {
                        0 => String::from("No results"),
                        1 => String::from("1 country"),
                        n => format!("{n} countries"),
                    };
                    app.no_results = countries.is_empty();
                    app.countries = countries;
                }
                Err(e) => {
                    error!("Error formatting country data: {}", e);
                    clear_results(app);
                }
            }
            Effect::None
        }
        Action::FetchFailed(e) => {
            error!("Error fetching data: {}", e);
            app.is_loading = false;
            clear_results(app);
            Effect::None
        }
        Action::Reset => {
            app.search_text.clear();
            app.countries.clear();
            app.no_results = false;
            app.status_message.clear();
            Effect::None
        }
        Action::OpenMap(index) => app.map_url(index).map_or(Effect::None, Effect::OpenUrl),
        Action::OpenEncyclopedia(index) => app
            .encyclopedia_url(index)
            .map_or(Effect::None, Effect::OpenUrl),
        Action::Quit => Effect::Quit,
    }
}

fn clear_results(app: &mut App) {
    app.countries.clear();
    app.no_results = true;
    app.status_message = String::from("No results");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{raw_country, test_app};

    fn loaded_app() -> App {
        let mut app = test_app();
        update(&mut app, Action::SearchTextChanged("fr".into()));
        update(&mut app, Action::Search);
        update(
            &mut app,
            Action::FetchSucceeded(vec![raw_country("FRA", "France"), raw_country("FRO", "Faroe Islands")]),
        );
        app
    }

    #[test]
    fn test_search_issues_name_fetch() {
        let mut app = test_app();
        update(&mut app, Action::SearchTextChanged("germany".into()));
        let effect = update(&mut app, Action::Search);

        assert_eq!(effect, Effect::Fetch(FetchMode::Search("germany".into())));
        assert!(app.is_loading);
    }

    #[test]
    fn test_search_text_is_sent_verbatim() {
        let mut app = test_app();
        update(&mut app, Action::SearchTextChanged(" new zealand ".into()));
        let effect = update(&mut app, Action::Search);
        assert_eq!(effect, Effect::Fetch(FetchMode::Search(" new zealand ".into())));
    }

    #[test]
    fn test_blank_search_does_nothing() {
        let mut app = test_app();
        update(&mut app, Action::SearchTextChanged("   ".into()));
        let effect = update(&mut app, Action::Search);

        assert_eq!(effect, Effect::None);
        assert!(!app.is_loading);
    }

    #[test]
    fn test_random_issues_full_fetch() {
        let mut app = test_app();
        let effect = update(&mut app, Action::RandomCountry);
        assert_eq!(effect, Effect::Fetch(FetchMode::Random));
        assert!(app.is_loading);
    }

    #[test]
    fn test_fetch_success_replaces_list() {
        let mut app = loaded_app();
        assert_eq!(app.countries.len(), 2);
        assert!(!app.is_loading);
        assert_eq!(app.status_message, "2 countries");

        update(&mut app, Action::RandomCountry);
        update(&mut app, Action::FetchSucceeded(vec![raw_country("JPN", "Japan")]));

        assert_eq!(app.countries.len(), 1);
        assert_eq!(app.countries[0].name, "Japan");
        assert_eq!(app.status_message, "1 country");
    }

    #[test]
    fn test_fetch_failure_clears_list() {
        let mut app = loaded_app();
        update(&mut app, Action::RandomCountry);
        let effect = update(&mut app, Action::FetchFailed(FetchError::Network("timed out".into())));

        assert_eq!(effect, Effect::None);
        assert!(app.countries.is_empty());
        assert!(!app.is_loading);
        assert_eq!(app.status_message, "No results");
        assert!(app.no_results);
    }

    #[test]
    fn test_normalize_fault_clears_list() {
        let mut app = loaded_app();
        let mut broken = raw_country("ATA", "Antarctica");
        broken.currencies.clear();

        update(&mut app, Action::FetchSucceeded(vec![broken]));

        assert!(app.countries.is_empty());
        assert_eq!(app.status_message, "No results");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut app = loaded_app();
        update(&mut app, Action::Reset);
        assert!(app.countries.is_empty());
        assert!(app.search_text.is_empty());

        // Reset on an already empty app is still empty
        let mut fresh = test_app();
        update(&mut fresh, Action::Reset);
        assert!(fresh.countries.is_empty());
        assert!(fresh.search_text.is_empty());

        // A failed fetch shows "No results" until reset
        update(&mut fresh, Action::FetchFailed(FetchError::EmptyDataset));
        assert!(fresh.no_results);
        update(&mut fresh, Action::Reset);
        assert!(!fresh.no_results);
    }

    #[test]
    fn test_last_completion_wins() {
        let mut app = test_app();
        update(&mut app, Action::SearchTextChanged("a".into()));
        update(&mut app, Action::Search);
        update(&mut app, Action::RandomCountry);

        // Random resolves first, search resolves last
        update(&mut app, Action::FetchSucceeded(vec![raw_country("PER", "Peru")]));
        update(
            &mut app,
            Action::FetchSucceeded(vec![raw_country("AUT", "Austria"), raw_country("AUS", "Australia")]),
        );

        let names: Vec<&str> = app.countries.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Austria", "Australia"]);
    }

    #[test]
    fn test_open_links() {
        let mut app = loaded_app();
        assert_eq!(
            update(&mut app, Action::OpenMap(1)),
            Effect::OpenUrl("https://maps.example/FRO".into())
        );
        assert_eq!(
            update(&mut app, Action::OpenEncyclopedia(1)),
            Effect::OpenUrl("https://wikipedia.org/wiki/Faroe Islands".into())
        );
        assert_eq!(update(&mut app, Action::OpenMap(7)), Effect::None);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
