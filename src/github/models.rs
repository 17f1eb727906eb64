//! Response shapes for the GitHub REST v3 endpoints we consume.
//!
//! Only the fields the UI needs are deserialized; everything else in the
//! payload is ignored.

use serde::{Deserialize, Serialize};

/// A user returned by the user-search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// GitHub login (username)
    pub login: String,
    /// URL of the user's avatar image
    pub avatar_url: String,
    /// URL of the user's profile page
    #[serde(rename = "html_url")]
    pub profile_url: String,
}

/// A repository returned by the repository-search or user-repos endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSummary {
    /// `owner/name`
    pub full_name: String,
}

/// Envelope of the `/search/*` endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse<T> {
    pub items: Vec<T>,
}
