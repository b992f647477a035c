//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`RepoSlug`] - Validated `owner/repo` repository identifier
//! - [`IssueNumber`] - Repository-scoped issue or discussion number
//! - [`IssueState`] - Open/closed state of an issue
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented.
//!
//! # Examples
//!
//! ```
//! use bugsift::core::types::RepoSlug;
//!
//! let slug = RepoSlug::parse("octocat/hello-world").unwrap();
//! assert_eq!(slug.owner(), "octocat");
//! assert_eq!(slug.repo(), "hello-world");
//!
//! assert!(RepoSlug::parse("no-slash").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid repository '{0}': expected format 'owner/repo'")]
    InvalidRepoSlug(String),

    #[error("invalid issue state: {0}")]
    InvalidIssueState(String),
}

/// A validated `owner/repo` repository identifier.
///
/// Both components must be non-empty and free of whitespace, and there
/// must be exactly one `/` separating them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepoSlug {
    owner: String,
    repo: String,
}

impl RepoSlug {
    /// Parse a slug from its `owner/repo` form.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidRepoSlug` if the input is not exactly two
    /// non-empty, whitespace-free components separated by `/`.
    pub fn parse(input: &str) -> Result<Self, TypeError> {
        let invalid = || TypeError::InvalidRepoSlug(input.to_string());

        let (owner, repo) = input.split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return Err(invalid());
        }
        if input.chars().any(|c| c.is_whitespace() || c.is_ascii_control()) {
            return Err(invalid());
        }

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    /// Repository owner (user or organization).
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name.
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Directory name used for this repository inside a data directory.
    ///
    /// The separator is flattened so every repository gets one directory:
    /// `octocat/hello-world` becomes `octocat_hello-world`.
    pub fn dir_name(&self) -> String {
        format!("{}_{}", self.owner, self.repo)
    }
}

impl TryFrom<String> for RepoSlug {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RepoSlug> for String {
    fn from(slug: RepoSlug) -> Self {
        slug.to_string()
    }
}

impl std::str::FromStr for RepoSlug {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Issue or discussion number, unique within one repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueNumber(pub u64);

impl IssueNumber {
    /// Get the raw number.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for IssueNumber {
    fn from(n: u64) -> Self {
        Self(n)
    }
}

impl std::fmt::Display for IssueNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// State of an issue as reported by the issues API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
}

impl IssueState {
    /// Get the state as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueState::Open => "open",
            IssueState::Closed => "closed",
        }
    }
}

impl std::str::FromStr for IssueState {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(IssueState::Open),
            "closed" => Ok(IssueState::Closed),
            other => Err(TypeError::InvalidIssueState(other.to_string())),
        }
    }
}

impl std::fmt::Display for IssueState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
