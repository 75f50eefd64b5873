//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status bar with spinner
//! - `CountryCard`: One country rendered as a bordered card
//! - `LandingPage`: Empty-state page
//! - `HelpBar`: Shortcut hints for the current mode
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `SearchBox`: Single-line query input
//! - `CountryList`: Scrollable result view with selection
//!
//! Components receive external data as "props" (struct fields), not by
//! reading global state, so every dependency is explicit at the call site:
//!
//! ```rust,ignore
//! CountryList::new(&mut tui.country_list, &app.countries).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── search_box.rs    (Query input)
//! ├── country_card.rs  (Single country renderer)
//! ├── country_list.rs  (Scrollable card container)
//! ├── landing.rs       (Empty state)
//! └── help_bar.rs      (Shortcut hints)
//! ```

pub mod country_card;
pub mod country_list;
pub mod help_bar;
pub mod landing;
pub mod search_box;
mod title_bar;

pub use country_list::{CountryList, CountryListState};
pub use help_bar::HelpBar;
pub use landing::LandingPage;
pub use search_box::{SearchBox, SearchEvent};
pub use title_bar::TitleBar;
