//! forge::traits
//!
//! Forge trait definition for reading issues and discussions from a remote
//! hosting service.
//!
//! # Design
//!
//! The `Forge` trait is async because forge operations involve network I/O.
//! All methods return `Result` to handle API errors gracefully. A listing
//! that fails part-way returns a [`ListingError`] carrying the pages that
//! arrived before the failure. A forge only reads; it never writes to the
//! remote.
//!
//! # Example
//!
//! ```ignore
//! use bugsift::forge::{Forge, ListIssuesOpts};
//!
//! async fn count_open(forge: &dyn Forge) -> Result<usize, ListingError<IssueRecord>> {
//!     let issues = forge.list_issues(ListIssuesOpts::default()).await?;
//!     Ok(issues.iter().filter(|i| i.is_open()).count())
//! }
//! ```

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::core::record::{DiscussionRecord, IssueRecord};

/// Errors from forge operations.
#[derive(Debug, Clone, Error)]
pub enum ForgeError {
    /// Authentication failed (invalid token, expired, insufficient permissions).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded.
    #[error("rate limited")]
    RateLimited,

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Network or connection error.
    #[error("network error: {0}")]
    NetworkError(String),
}

/// A listing stopped by `error`, with the records fetched before it.
#[derive(Debug, Clone)]
pub struct ListingError<T> {
    /// Records from the pages that succeeded
    pub fetched: Vec<T>,
    /// Error that ended the listing
    pub error: ForgeError,
}

impl<T> ListingError<T> {
    /// Finish a listing: `records` on success, otherwise the partial error.
    pub fn finish(records: Vec<T>, result: Result<(), ForgeError>) -> Result<Vec<T>, Self> {
        match result {
            Ok(()) => Ok(records),
            Err(error) => Err(Self {
                fetched: records,
                error,
            }),
        }
    }
}

impl<T> From<ForgeError> for ListingError<T> {
    fn from(error: ForgeError) -> Self {
        Self {
            fetched: Vec::new(),
            error,
        }
    }
}

impl<T> fmt::Display for ListingError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl<T: fmt::Debug> std::error::Error for ListingError<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Which issues to list by state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateFilter {
    /// Open and closed issues
    #[default]
    All,
    /// Open issues only
    Open,
    /// Closed issues only
    Closed,
}

impl StateFilter {
    /// Query parameter value.
    pub fn as_str(&self) -> &'static str {
        match self {
            StateFilter::All => "all",
            StateFilter::Open => "open",
            StateFilter::Closed => "closed",
        }
    }
}

impl std::fmt::Display for StateFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for listing issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListIssuesOpts {
    /// State filter
    pub state: StateFilter,
    /// Page size requested from the API
    pub per_page: u32,
}

impl ListIssuesOpts {
    /// GitHub's maximum page size.
    pub const MAX_PER_PAGE: u32 = 100;

    /// Page size clamped to `1..=MAX_PER_PAGE`.
    pub fn effective_per_page(&self) -> u32 {
        self.per_page.clamp(1, Self::MAX_PER_PAGE)
    }
}

impl Default for ListIssuesOpts {
    fn default() -> Self {
        Self {
            state: StateFilter::All,
            per_page: Self::MAX_PER_PAGE,
        }
    }
}

/// The Forge trait for reading from remote hosting services.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Error Handling
///
/// A failed page ends the listing with a [`ListingError`] holding the
/// records of earlier pages; nothing is retried.
#[async_trait]
pub trait Forge: Send + Sync {
    /// Get the forge name (e.g., "github").
    fn name(&self) -> &'static str;

    /// List every issue of the repository, newest first.
    ///
    /// Pull requests are excluded even when the API returns them alongside
    /// issues.
    ///
    /// # Errors
    ///
    /// - `AuthFailed` if the token is invalid or lacks permissions
    /// - `NotFound` if the repository doesn't exist
    /// - `RateLimited` if the API rate limit is exhausted
    async fn list_issues(
        &self,
        opts: ListIssuesOpts,
    ) -> Result<Vec<IssueRecord>, ListingError<IssueRecord>>;

    /// List every discussion of the repository.
    ///
    /// # Errors
    ///
    /// Same as [`Forge::list_issues`]; GraphQL-level errors are reported as
    /// `ApiError`.
    async fn list_discussions(&self) -> Result<Vec<DiscussionRecord>, ListingError<DiscussionRecord>>;
}
