//! # Core Application Logic
//!
//! This module contains Terra's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • normalize()          │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │  One-shot  │
//!             │  Adapter   │          │   print    │
//!             │ (ratatui)  │          │  (main.rs) │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`country`]: Display records and the normalizer
//! - [`config`]: Config file loading and override resolution

pub mod action;
pub mod config;
pub mod country;
pub mod state;
