//! Blocking client for the public GitHub REST v3 API.
//!
//! The [`SearchApi`] trait is the seam the search controller talks through;
//! [`ApiClient`] is the real implementation backed by `ureq`.

mod models;

pub use models::{RepoSummary, UserSummary};

use crate::config::Config;
use models::SearchResponse;
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use ureq::Agent;

/// Versioned JSON media type sent on every request.
pub const ACCEPT: &str = "application/vnd.github.v3+json";

/// Errors returned by GitHub API calls.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("GitHub API returned {status} {reason}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Canonical status text (empty when unknown)
        reason: String,
    },
    /// The request could not be sent or the response could not be read.
    #[error("Request to {url} failed: {message}")]
    Transport {
        /// Requested URL
        url: String,
        /// Underlying error
        message: String,
    },
    /// The response body was not the JSON shape we expect.
    #[error("Failed to decode response from {url}: {message}")]
    Decode {
        /// Requested URL
        url: String,
        /// Underlying error
        message: String,
    },
}

impl ApiError {
    fn status(status: u16) -> Self {
        let reason = ureq::http::StatusCode::from_u16(status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or_default()
            .to_string();
        Self::Status { status, reason }
    }

    /// Status text of an HTTP failure, if this is one.
    #[must_use]
    pub fn status_text(&self) -> Option<&str> {
        match self {
            Self::Status { reason, .. } => Some(reason),
            Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }
}

/// Operations the search controller needs from GitHub.
pub trait SearchApi: fmt::Debug {
    /// `GET /search/users?q={term}`
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the body cannot be decoded.
    fn search_users(&self, term: &str) -> Result<Vec<UserSummary>, ApiError>;

    /// `GET /search/repositories?q={term}`
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the body cannot be decoded.
    fn search_repos(&self, term: &str) -> Result<Vec<RepoSummary>, ApiError>;

    /// `GET /users/{login}/repos`
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the body cannot be decoded.
    fn user_repos(&self, login: &str) -> Result<Vec<RepoSummary>, ApiError>;
}

impl<T: SearchApi + ?Sized> SearchApi for Box<T> {
    fn search_users(&self, term: &str) -> Result<Vec<UserSummary>, ApiError> {
        (**self).search_users(term)
    }

    fn search_repos(&self, term: &str) -> Result<Vec<RepoSummary>, ApiError> {
        (**self).search_repos(term)
    }

    fn user_repos(&self, login: &str) -> Result<Vec<RepoSummary>, ApiError> {
        (**self).user_repos(login)
    }
}

impl<T: SearchApi + ?Sized> SearchApi for &T {
    fn search_users(&self, term: &str) -> Result<Vec<UserSummary>, ApiError> {
        (**self).search_users(term)
    }

    fn search_repos(&self, term: &str) -> Result<Vec<RepoSummary>, ApiError> {
        (**self).search_repos(term)
    }

    fn user_repos(&self, login: &str) -> Result<Vec<RepoSummary>, ApiError> {
        (**self).user_repos(login)
    }
}

/// GitHub client backed by a `ureq` agent.
#[derive(Debug, Clone)]
pub struct ApiClient {
    agent: Agent,
    base_url: String,
    user_agent: String,
}

impl ApiClient {
    /// Build a client from the API settings in `config`.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let agent_config = ureq::config::Config::builder()
            .timeout_global(Some(Duration::from_secs(config.request_timeout_secs)))
            .build();
        Self {
            agent: agent_config.new_agent(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }

    /// Base URL requests are sent to (no trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, term: Option<&str>) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base_url);
        debug!(url, term, "GET");

        let mut request = self
            .agent
            .get(&url)
            .header("Accept", ACCEPT)
            .header("User-Agent", self.user_agent.as_str());
        if let Some(term) = term {
            request = request.query("q", term);
        }

        let response = match request.call() {
            Ok(response) => response,
            Err(ureq::Error::StatusCode(status)) => return Err(ApiError::status(status)),
            Err(err) => {
                return Err(ApiError::Transport {
                    url,
                    message: err.to_string(),
                });
            }
        };

        response
            .into_body()
            .read_json::<T>()
            .map_err(|err| ApiError::Decode {
                url,
                message: err.to_string(),
            })
    }
}

impl SearchApi for ApiClient {
    fn search_users(&self, term: &str) -> Result<Vec<UserSummary>, ApiError> {
        let response: SearchResponse<UserSummary> =
            self.get_json("/search/users", Some(term))?;
        Ok(response.items)
    }

    fn search_repos(&self, term: &str) -> Result<Vec<RepoSummary>, ApiError> {
        let response: SearchResponse<RepoSummary> =
            self.get_json("/search/repositories", Some(term))?;
        Ok(response.items)
    }

    fn user_repos(&self, login: &str) -> Result<Vec<RepoSummary>, ApiError> {
        let path = format!("/users/{}/repos", urlencoding::encode(login));
        self.get_json(&path, None)
    }
}
