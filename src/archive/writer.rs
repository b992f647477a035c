//! archive::writer
//!
//! Persist fetched records and rollup summaries.
//!
//! # Layout
//!
//! See [`crate::core::paths`]. The issues directory and its summary are
//! always written; the discussions directory only when there is at least
//! one discussion.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use super::summary::{CombinedSummary, DiscussionsSummary, IssuesSummary};
use super::ArchiveError;
use crate::core::paths::ArchivePaths;
use crate::core::record::{DiscussionRecord, IssueRecord};
use crate::core::types::RepoSlug;

/// Writes one repository's archive.
#[derive(Debug, Clone)]
pub struct ArchiveWriter {
    slug: RepoSlug,
    paths: ArchivePaths,
}

impl ArchiveWriter {
    /// Create a writer for `slug` under `data_dir`.
    pub fn new(data_dir: &Path, slug: RepoSlug) -> Self {
        let paths = ArchivePaths::new(data_dir, &slug);
        Self { slug, paths }
    }

    /// Paths this writer writes to.
    pub fn paths(&self) -> &ArchivePaths {
        &self.paths
    }

    /// Write every record and all summaries.
    ///
    /// Existing files with the same names are overwritten.
    pub fn write(
        &self,
        issues: &[IssueRecord],
        discussions: &[DiscussionRecord],
        fetched_at: DateTime<Utc>,
    ) -> Result<CombinedSummary, ArchiveError> {
        self.write_issues(issues, fetched_at)?;

        if !discussions.is_empty() {
            self.write_discussions(discussions, fetched_at)?;
        }

        let summary = CombinedSummary::new(self.slug.clone(), issues, discussions, fetched_at);
        write_json(&self.paths.summary_path(), &summary)?;
        Ok(summary)
    }

    fn write_issues(
        &self,
        issues: &[IssueRecord],
        fetched_at: DateTime<Utc>,
    ) -> Result<(), ArchiveError> {
        create_dir(&self.paths.issues_dir())?;

        for issue in issues {
            write_json(&self.paths.issue_path(issue.number), issue)?;
        }

        write_json(
            &self.paths.issues_summary_path(),
            &IssuesSummary::new(issues, fetched_at),
        )
    }

    fn write_discussions(
        &self,
        discussions: &[DiscussionRecord],
        fetched_at: DateTime<Utc>,
    ) -> Result<(), ArchiveError> {
        create_dir(&self.paths.discussions_dir())?;

        for discussion in discussions {
            write_json(&self.paths.discussion_path(discussion.number), discussion)?;
        }

        write_json(
            &self.paths.discussions_summary_path(),
            &DiscussionsSummary::new(discussions, fetched_at),
        )
    }
}

fn create_dir(path: &Path) -> Result<(), ArchiveError> {
    fs::create_dir_all(path).map_err(|source| ArchiveError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize `value` as pretty JSON into `path`.
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ArchiveError> {
    let contents = serde_json::to_vec_pretty(value).map_err(|source| ArchiveError::Serialize {
        path: PathBuf::from(path),
        source,
    })?;

    debug!(path = %path.display(), bytes = contents.len(), "writing archive file");

    fs::write(path, contents).map_err(|source| ArchiveError::Write {
        path: path.to_path_buf(),
        source,
    })
}
