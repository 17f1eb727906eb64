//! Search controller: mode state, API dispatch and result rendering.
//!
//! The controller owns the current [`SearchMode`] and two render targets:
//! the primary list shows user search results, the secondary list shows
//! repositories (from a repository search or from drilling into a user).
//! Every network call returns a `Result`; a failed call is logged and leaves
//! the target list untouched.

mod entry;
mod target;

pub use entry::{Avatar, Entry, LinkTarget, ProfileLink, RepoEntry, UserEntry};
pub use target::{EntryList, PlainText, RenderTarget};

use crate::github::{ApiError, RepoSummary, SearchApi, UserSummary};
use thiserror::Error;
use tracing::{debug, error, info};

/// Which kind of GitHub entity a submitted term is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Search users
    #[default]
    User,
    /// Search repositories
    Repo,
}

impl SearchMode {
    /// The other mode
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::User => Self::Repo,
            Self::Repo => Self::User,
        }
    }

    /// Label of the submit control for this mode
    #[must_use]
    pub const fn submit_label(self) -> &'static str {
        match self {
            Self::User => "Search Users",
            Self::Repo => "Search Repos",
        }
    }
}

/// Why a search did not render anything.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The submitted term was empty or whitespace.
    #[error("No value submitted")]
    EmptyTerm,
    /// The GitHub request failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Trim a submitted term, returning `None` when nothing is left.
#[must_use]
pub fn normalize_term(term: &str) -> Option<&str> {
    let trimmed = term.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Drives searches against a [`SearchApi`] and renders into two targets.
#[derive(Debug)]
pub struct SearchController<A, R = EntryList> {
    api: A,
    mode: SearchMode,
    primary: R,
    secondary: R,
}

impl<A: SearchApi, R: RenderTarget> SearchController<A, R> {
    /// Create a controller in [`SearchMode::User`].
    pub fn new(api: A, primary: R, secondary: R) -> Self {
        Self {
            api,
            mode: SearchMode::default(),
            primary,
            secondary,
        }
    }

    /// The API the controller talks to
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Current search mode
    pub const fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Label of the submit control for the current mode
    pub const fn submit_label(&self) -> &'static str {
        self.mode.submit_label()
    }

    /// User search results
    pub const fn primary(&self) -> &R {
        &self.primary
    }

    /// Mutable access to the user list (selection)
    pub const fn primary_mut(&mut self) -> &mut R {
        &mut self.primary
    }

    /// Repository results
    pub const fn secondary(&self) -> &R {
        &self.secondary
    }

    /// Mutable access to the repository list (selection)
    pub const fn secondary_mut(&mut self) -> &mut R {
        &mut self.secondary
    }

    /// Consume the controller, returning both targets
    pub fn into_targets(self) -> (R, R) {
        (self.primary, self.secondary)
    }

    /// Flip between user and repository search. No request is made.
    pub fn toggle_mode(&mut self) -> SearchMode {
        self.mode = self.mode.toggled();
        debug!(mode = ?self.mode, "Search mode toggled");
        self.mode
    }

    /// Search for `term` in the current mode and render the results.
    ///
    /// Returns the number of rendered entries.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyTerm`] without touching the network when
    /// `term` is blank, or [`SearchError::Api`] when the request fails; in
    /// both cases the lists keep their previous contents.
    pub fn submit_search(&mut self, term: &str) -> Result<usize, SearchError> {
        let Some(term) = normalize_term(term) else {
            debug!("Ignoring empty search term");
            return Err(SearchError::EmptyTerm);
        };

        match self.mode {
            SearchMode::User => {
                let users = self.fetch_users(term)?;
                Ok(self.render_users(&users))
            }
            SearchMode::Repo => {
                let repos = self.fetch_repos(term)?;
                Ok(self.render_repos(&repos))
            }
        }
    }

    /// Query the user-search endpoint.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] after logging it.
    pub fn fetch_users(&self, term: &str) -> Result<Vec<UserSummary>, ApiError> {
        self.api
            .search_users(term)
            .inspect(|users| info!(term, count = users.len(), "Fetched users"))
            .inspect_err(|err| log_failure("Error fetching users", err))
    }

    /// Query the repository-search endpoint.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] after logging it.
    pub fn fetch_repos(&self, term: &str) -> Result<Vec<RepoSummary>, ApiError> {
        self.api
            .search_repos(term)
            .inspect(|repos| info!(term, count = repos.len(), "Fetched repositories"))
            .inspect_err(|err| log_failure("Error fetching repositories", err))
    }

    /// List every repository of `login`.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] after logging it.
    pub fn fetch_user_repos(&self, login: &str) -> Result<Vec<RepoSummary>, ApiError> {
        self.api
            .user_repos(login)
            .inspect(|repos| info!(login, count = repos.len(), "Fetched user repositories"))
            .inspect_err(|err| log_failure("Error fetching user repositories", err))
    }

    /// Replace the primary list with one entry per user.
    pub fn render_users(&mut self, users: &[UserSummary]) -> usize {
        self.primary.clear();
        for user in users {
            self.primary.append(Entry::from(user));
        }
        users.len()
    }

    /// Replace the secondary list with one entry per repository.
    pub fn render_repos(&mut self, repos: &[RepoSummary]) -> usize {
        self.secondary.clear();
        for repo in repos {
            self.secondary.append(Entry::from(repo));
        }
        repos.len()
    }

    /// Fetch `login`'s repositories into the secondary list.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Api`] when the request fails; the secondary
    /// list keeps its previous contents.
    pub fn show_user_repos(&mut self, login: &str) -> Result<usize, SearchError> {
        let repos = self.fetch_user_repos(login)?;
        Ok(self.render_repos(&repos))
    }

    /// Activate an entry: user entries list that user's repositories,
    /// anything else is ignored (`Ok(None)`).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Api`] when the repository request fails.
    pub fn activate(&mut self, entry: &Entry) -> Result<Option<usize>, SearchError> {
        match entry.activation() {
            Some(login) => self.show_user_repos(login).map(Some),
            None => Ok(None),
        }
    }
}

impl<A: SearchApi> SearchController<A, EntryList> {
    /// Activate the primary entry at `index`; out-of-range indices are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Api`] when the repository request fails.
    pub fn activate_at(&mut self, index: usize) -> Result<Option<usize>, SearchError> {
        let Some(entry) = self.primary.entries().get(index).cloned() else {
            return Ok(None);
        };
        self.activate(&entry)
    }

    /// Activate the selected primary entry.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Api`] when the repository request fails.
    pub fn activate_selected(&mut self) -> Result<Option<usize>, SearchError> {
        self.activate_at(self.primary.selected())
    }
}

fn log_failure(context: &str, err: &ApiError) {
    match err.status_text() {
        Some(status_text) => error!(status_text, "{context}: {err}"),
        None => error!("{context}: {err}"),
    }
}

#[cfg(test)]
mod tests;
