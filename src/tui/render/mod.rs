//! TUI rendering
//!
//! - `colors`: Color palette definitions
//! - `main_layout`: search input, result lists and status bar
//! - `modals`: help overlay and warning modal

pub mod colors;
pub mod main_layout;
pub mod modals;

use crate::app::{App, Mode};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Render the full application UI
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    main_layout::render_search_input(frame, app, chunks[0]);
    main_layout::render_results(frame, app, chunks[1]);
    main_layout::render_status_bar(frame, app, chunks[2]);

    match &app.mode {
        Mode::Help => modals::render_help_overlay(frame, app),
        Mode::Warning(message) => modals::render_warning_modal(frame, message),
        Mode::Editing | Mode::Browsing => {}
    }
}
