//! Keybinding action handlers

use crate::browser;
use crate::config::Action;
use tracing::debug;

use super::state::{App, Mode};

/// Handler for keybinding actions while browsing results
#[derive(Debug, Clone, Copy, Default)]
pub struct Actions;

impl Actions {
    /// Create a new action handler
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Handle a keybinding action
    pub fn handle_action(self, app: &mut App, action: Action) {
        debug!(?action, "Handling action");
        match action {
            Action::EditQuery => {
                app.input.cursor_end();
                app.enter_mode(Mode::Editing);
            }
            Action::ToggleMode => app.toggle_search_mode(),
            Action::Activate => app.activate_selected(),
            Action::OpenProfile => Self::open_selected_profile(app),
            Action::NextEntry => app.select_next(),
            Action::PrevEntry => app.select_prev(),
            Action::SwitchPane => app.switch_pane(),
            Action::Help => app.enter_mode(Mode::Help),
            Action::Quit => app.should_quit = true,
            Action::Cancel => {
                if app.mode == Mode::Browsing {
                    app.clear_status();
                } else {
                    app.exit_mode();
                }
            }
        }
    }

    fn open_selected_profile(app: &mut App) {
        let Some(url) = app.selected_profile_url().map(str::to_string) else {
            return;
        };
        match browser::open_external(&url) {
            Ok(()) => app.set_status(format!("Opened {url}")),
            Err(e) => app.set_error(format!("{e:#}")),
        }
    }
}
