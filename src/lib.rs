//! ghsearch - Search GitHub users and repositories from the terminal
//!
//! A search controller drives the GitHub REST API and renders results into
//! injected render targets: selectable lists in the TUI, or plain text for
//! one-shot CLI searches.

pub mod app;
pub mod browser;
pub mod config;
pub mod github;
pub mod paths;
pub mod search;
pub mod tui;

pub use app::App;
pub use config::Config;
pub use github::{ApiClient, ApiError, SearchApi};
pub use search::{SearchController, SearchError, SearchMode};
