//! # Atlas 🌍
//!
//! A beautiful terminal country browser.
//!
//! ## Overview
//!
//! Atlas lets you explore every country in the world from your terminal:
//! search by name, filter by continent and time zone, and drill into a
//! detail view with flags, local time and quick facts. Data comes from the
//! free REST Countries API.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          App                                │
//! │  Orchestrates all components and runs the main event loop   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!          ┌───────────────────┼───────────────────┐
//!          ▼                   ▼                   ▼
//! ┌─────────────────┐ ┌─────────────────┐ ┌─────────────────┐
//! │     Config      │ │       API       │ │       UI        │
//! │                 │ │                 │ │                 │
//! │ • Load/Save     │ │ • REST Countries│ │ • Sectioned list│
//! │ • Theme         │ │ • Fetch all     │ │ • Detail view   │
//! │ • Preferences   │ │ • Fetch by name │ │ • Filter modal  │
//! └─────────────────┘ └─────────────────┘ └─────────────────┘
//!          │                   │                   │
//!          └───────────────────┴───────────────────┘
//!                              │
//!          ┌───────────────────┼───────────────────┐
//!          ▼                   ▼                   ▼
//! ┌─────────────────┐ ┌─────────────────┐ ┌─────────────────┐
//! │     Filter      │ │     Images      │ │     Models      │
//! │                 │ │                 │ │                 │
//! │ • Name search   │ │ • Flag download │ │ • Country       │
//! │ • Continents    │ │ • LRU cache     │ │ • Currency      │
//! │ • Time zones    │ │ • Protocols     │ │ • Timezones     │
//! └─────────────────┘ └─────────────────┘ └─────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`api`] — REST Countries API client
//! - [`app`] — TUI application state and event loop
//! - [`config`] — Configuration management
//! - [`demo`] — Bundled data for screenshots and offline use
//! - [`filter`] — Search, filter and section grouping engine
//! - [`images`] — Flag and coat-of-arms image cache
//! - [`models`] — Data models (Country and friends)
//! - [`theme`] — Theme support via ratatui-themes
//!
//! ## Example
//!
//! ```no_run
//! use atlas::app;
//!
//! fn main() -> anyhow::Result<()> {
//!     app::run()
//! }
//! ```
//!
//! ## Features
//!
//! - **Complete** — All 250 countries and territories
//! - **Fast Search** — Live name search and continent/timezone filters
//! - **Beautiful TUI** — Sectioned list with 15 themes
//! - **Rich Details** — Flags, local time, currencies, calling codes
//! - **Fast** — Async networking with Tokio

#![doc(html_root_url = "https://docs.rs/atlas/0.1.0")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::unused_async)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::if_not_else)]
#![allow(clippy::single_match_else)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::use_self)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::similar_names)]
#![allow(clippy::manual_let_else)]
#![allow(clippy::return_self_not_must_use)]

pub mod api;
pub mod app;
pub mod config;
pub mod demo;
pub mod filter;
pub mod images;
pub mod models;
pub mod theme;

// Re-export main types for convenience
pub use api::RestCountriesClient;
pub use app::AppState;
pub use config::Config;
pub use filter::{CONTINENTS, FilterCriteria, Section, available_timezones, compute_sections};
pub use models::Country;
pub use theme::{Theme, ThemeColors};

// Re-export theme types from ratatui-themes crate
pub use ratatui_themes::{ThemeName, ThemePalette};

/// ASCII logo for the application
pub const LOGO: &str = r"
   ___  __  __
  / _ |/ /_/ /__ ____
 / __ / __/ / _ `(_-<
/_/ |_\__/_/\_,_/___/
";

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Repository URL
pub const REPO_URL: &str = "https://github.com/atlas-tui/atlas";
