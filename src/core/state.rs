//! # Application State
//!
//! Core business state for Terra. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── countries: Vec<Country>       // displayed result set
//! ├── search_text: String           // current query
//! ├── is_loading: bool              // a fetch is outstanding
//! ├── no_results: bool              // last fetch ended empty or failed
//! ├── status_message: String        // status bar text
//! ├── format: DisplayFormat         // digit grouping for population
//! └── encyclopedia_prefix: String   // prefix for encyclopedia links
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::config::ResolvedConfig;
use crate::core::country::{Country, DisplayFormat, encyclopedia_url};

pub struct App {
    pub countries: Vec<Country>,
    pub search_text: String,
    pub is_loading: bool,
    pub no_results: bool,
    pub status_message: String,
    pub format: DisplayFormat,
    pub encyclopedia_prefix: String,
}

impl App {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            countries: Vec::new(),
            search_text: String::new(),
            is_loading: false,
            no_results: false,
            status_message: String::from("Welcome to Terra!"),
            format: config.format,
            encyclopedia_prefix: config.encyclopedia_prefix.clone(),
        }
    }

    /// Map link of the country at `index`, verbatim from the provider.
    pub fn map_url(&self, index: usize) -> Option<String> {
        self.countries.get(index).map(|c| c.location.clone())
    }

    /// Encyclopedia link of the country at `index`.
    pub fn encyclopedia_url(&self, index: usize) -> Option<String> {
        self.countries
            .get(index)
            .map(|c| encyclopedia_url(&self.encyclopedia_prefix, &c.name))
    }
}
