//! Application state

use crate::config::Config;
use crate::github::SearchApi;
use crate::search::{
    EntryList, SearchController, SearchError, SearchMode, normalize_term,
};
use tracing::debug;

use super::input::InputState;

/// Interaction mode of the TUI
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Mode {
    /// Typing into the search input
    #[default]
    Editing,
    /// Navigating the result lists
    Browsing,
    /// Help overlay
    Help,
    /// Modal warning; any key dismisses it
    Warning(String),
}

/// Which result list has focus while browsing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pane {
    /// Primary list (user search results)
    #[default]
    Users,
    /// Secondary list (repositories)
    Repos,
}

impl Pane {
    /// The other pane
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Users => Self::Repos,
            Self::Repos => Self::Users,
        }
    }
}

/// A request waiting to run on the next loop iteration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Search for a (trimmed, non-empty) term in the current mode
    Search(String),
    /// List a user's repositories
    UserRepos(String),
}

impl Request {
    /// Status line shown while the request is in flight
    #[must_use]
    pub fn loading_message(&self, mode: SearchMode) -> String {
        match (self, mode) {
            (Self::Search(term), SearchMode::User) => format!("Searching users for \"{term}\"..."),
            (Self::Search(term), SearchMode::Repo) => {
                format!("Searching repositories for \"{term}\"...")
            }
            (Self::UserRepos(login), _) => format!("Loading repositories of {login}..."),
        }
    }
}

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: Config,

    /// Search controller and its two result lists
    pub search: SearchController<Box<dyn SearchApi>>,

    /// Current interaction mode
    pub mode: Mode,

    /// Focused result list
    pub focus: Pane,

    /// Search input
    pub input: InputState,

    /// Request to run after the next draw
    pub pending: Option<Request>,

    /// Last error message (if any)
    pub last_error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new application talking to `api`
    #[must_use]
    pub fn new(config: Config, api: Box<dyn SearchApi>) -> Self {
        Self {
            config,
            search: SearchController::new(api, EntryList::new(), EntryList::new()),
            mode: Mode::default(),
            focus: Pane::default(),
            input: InputState::new(),
            pending: None,
            last_error: None,
            status_message: None,
            should_quit: false,
        }
    }

    /// Enter a mode
    pub fn enter_mode(&mut self, mode: Mode) {
        debug!(?mode, "Entering mode");
        self.mode = mode;
    }

    /// Leave the current mode, returning to browsing
    pub fn exit_mode(&mut self) {
        self.mode = Mode::Browsing;
    }

    /// Show a modal warning
    pub fn show_warning(&mut self, message: impl Into<String>) {
        self.enter_mode(Mode::Warning(message.into()));
    }

    /// Dismiss the warning modal and go back to the input
    pub fn dismiss_warning(&mut self) {
        self.mode = Mode::Editing;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.last_error = None;
    }

    /// Record an error for the status bar
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
        self.status_message = None;
    }

    /// Clear status and error
    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.last_error = None;
    }

    /// Current search mode
    #[must_use]
    pub fn search_mode(&self) -> SearchMode {
        self.search.mode()
    }

    /// Flip the search mode
    pub fn toggle_search_mode(&mut self) {
        let mode = self.search.toggle_mode();
        self.set_status(format!("Mode: {}", mode.submit_label()));
    }

    /// Submit the current input.
    ///
    /// A blank term raises the "No value submitted" warning and queues nothing.
    pub fn submit(&mut self) {
        match normalize_term(&self.input.buffer) {
            Some(term) => self.pending = Some(Request::Search(term.to_string())),
            None => self.show_warning(SearchError::EmptyTerm.to_string()),
        }
    }

    /// Queue a repository listing for the selected user, if a user is selected.
    pub fn activate_selected(&mut self) {
        if self.focus != Pane::Users {
            return;
        }
        let login = self
            .search
            .primary()
            .selected_entry()
            .and_then(|entry| entry.activation())
            .map(str::to_string);
        if let Some(login) = login {
            self.pending = Some(Request::UserRepos(login));
        }
    }

    /// Profile URL of the selected user entry
    #[must_use]
    pub fn selected_profile_url(&self) -> Option<&str> {
        self.focused_list()
            .selected_entry()
            .and_then(|entry| entry.profile())
            .map(|link| link.href.as_str())
    }

    /// Status line for the in-flight request
    #[must_use]
    pub fn loading_message(&self) -> Option<String> {
        self.pending
            .as_ref()
            .map(|request| request.loading_message(self.search_mode()))
    }

    /// Run the queued request, if any.
    ///
    /// Failures are surfaced in the status bar; the affected list keeps its
    /// previous contents.
    pub fn process_pending(&mut self) {
        let Some(request) = self.pending.take() else {
            return;
        };

        let (result, noun, pane) = match &request {
            Request::Search(term) => {
                let (noun, pane) = match self.search_mode() {
                    SearchMode::User => ("users", Pane::Users),
                    SearchMode::Repo => ("repositories", Pane::Repos),
                };
                (self.search.submit_search(term), noun, pane)
            }
            Request::UserRepos(login) => (
                self.search.show_user_repos(login),
                "repositories",
                Pane::Repos,
            ),
        };

        match result {
            Ok(count) => {
                let message = match &request {
                    Request::UserRepos(login) => format!("{count} {noun} of {login}"),
                    Request::Search(term) => format!("{count} {noun} matching \"{term}\""),
                };
                self.set_status(message);
                self.focus = pane;
                self.mode = Mode::Browsing;
            }
            Err(SearchError::EmptyTerm) => {
                self.show_warning(SearchError::EmptyTerm.to_string());
            }
            Err(SearchError::Api(err)) => {
                self.set_error(err.to_string());
            }
        }
    }

    /// The list that currently has focus
    #[must_use]
    pub fn focused_list(&self) -> &EntryList {
        match self.focus {
            Pane::Users => self.search.primary(),
            Pane::Repos => self.search.secondary(),
        }
    }

    fn focused_list_mut(&mut self) -> &mut EntryList {
        match self.focus {
            Pane::Users => self.search.primary_mut(),
            Pane::Repos => self.search.secondary_mut(),
        }
    }

    /// Select the next entry in the focused list
    pub fn select_next(&mut self) {
        self.focused_list_mut().select_next();
    }

    /// Select the previous entry in the focused list
    pub fn select_prev(&mut self) {
        self.focused_list_mut().select_prev();
    }

    /// Move focus to the other list
    pub const fn switch_pane(&mut self) {
        self.focus = self.focus.other();
    }
}
