//! core
//!
//! Core domain types, schemas, and storage layout for bugsift.
//!
//! # Modules
//!
//! - [`types`] - Strong types: RepoSlug, IssueNumber, IssueState
//! - [`record`] - Issue and discussion records as stored in the archive
//! - [`paths`] - Archive directory layout
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Records keep the remote's field names so stored JSON stays readable

pub mod config;
pub mod paths;
pub mod record;
pub mod types;
