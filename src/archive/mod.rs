//! archive
//!
//! On-disk store of fetched records.
//!
//! # Modules
//!
//! - [`writer`] - Persist records and rollup summaries after a fetch
//! - [`loader`] - Read issue records back for analysis
//! - [`summary`] - Rollup summary types
//!
//! The archive is the only link between the fetch and analyze pipelines.

pub mod loader;
pub mod summary;
pub mod writer;

pub use loader::{IssueDirectory, LoadOutcome, SkippedRecord};
pub use writer::ArchiveWriter;

use std::path::PathBuf;
use thiserror::Error;

/// Errors from archive operations.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("{} not found", .0.display())]
    MissingDirectory(PathBuf),

    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize '{path}': {source}")]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
}
