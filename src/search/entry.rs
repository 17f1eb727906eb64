//! Rendered list entries.

use crate::github::{RepoSummary, UserSummary};

/// Where a link should open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// Open outside the application (browser)
    External,
}

/// Avatar image of a user entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    /// Image URL
    pub src: String,
    /// Alternate text, `"{login}'s avatar"`
    pub alt: String,
}

/// Link to a user's GitHub profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileLink {
    /// Profile URL
    pub href: String,
    /// Link label
    pub text: &'static str,
    /// Where the link opens
    pub target: LinkTarget,
}

/// One user in the primary list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEntry {
    /// Avatar image
    pub avatar: Avatar,
    /// Username label
    pub username: String,
    /// External profile link
    pub profile: ProfileLink,
}

impl From<&UserSummary> for UserEntry {
    fn from(user: &UserSummary) -> Self {
        Self {
            avatar: Avatar {
                src: user.avatar_url.clone(),
                alt: format!("{}'s avatar", user.login),
            },
            username: user.login.clone(),
            profile: ProfileLink {
                href: user.profile_url.clone(),
                text: "Profile",
                target: LinkTarget::External,
            },
        }
    }
}

/// One repository in the secondary list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoEntry {
    /// Displayed text, the repository's `full_name`
    pub text: String,
}

impl From<&RepoSummary> for RepoEntry {
    fn from(repo: &RepoSummary) -> Self {
        Self {
            text: repo.full_name.clone(),
        }
    }
}

/// A rendered list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Activatable user entry
    User(UserEntry),
    /// Plain repository entry
    Repo(RepoEntry),
}

impl Entry {
    /// Login to drill into when this entry is activated.
    ///
    /// Only user entries are activatable.
    #[must_use]
    pub fn activation(&self) -> Option<&str> {
        match self {
            Self::User(user) => Some(&user.username),
            Self::Repo(_) => None,
        }
    }

    /// Main text shown for the entry.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::User(user) => &user.username,
            Self::Repo(repo) => &repo.text,
        }
    }

    /// Profile link, for user entries.
    #[must_use]
    pub const fn profile(&self) -> Option<&ProfileLink> {
        match self {
            Self::User(user) => Some(&user.profile),
            Self::Repo(_) => None,
        }
    }
}

impl From<&UserSummary> for Entry {
    fn from(user: &UserSummary) -> Self {
        Self::User(user.into())
    }
}

impl From<&RepoSummary> for Entry {
    fn from(repo: &RepoSummary) -> Self {
        Self::Repo(repo.into())
    }
}
