//! core::paths
//!
//! Centralized path routing for archive storage locations.
//!
//! # Storage Layout
//!
//! All data for one repository is stored under
//! `<data_dir>/<owner>_<repo>/`:
//! - `summary.json` - Combined rollup for the fetch
//! - `issues/issue_<number>.json` - One issue record per file
//! - `issues/summary.json` - Issue rollup
//! - `discussions/discussion_<number>.json` - One discussion record per file
//! - `discussions/summary.json` - Discussion rollup
//!
//! No code outside this module should format record file names.
//!
//! # Example
//!
//! ```
//! use bugsift::core::paths::ArchivePaths;
//! use bugsift::core::types::{IssueNumber, RepoSlug};
//! use std::path::{Path, PathBuf};
//!
//! let slug = RepoSlug::parse("octocat/hello-world").unwrap();
//! let paths = ArchivePaths::new(Path::new("/data"), &slug);
//!
//! assert_eq!(
//!     paths.issue_path(IssueNumber(42)),
//!     PathBuf::from("/data/octocat_hello-world/issues/issue_42.json")
//! );
//! ```

use std::path::{Path, PathBuf};

use super::types::{IssueNumber, RepoSlug};

/// File name of every rollup summary.
pub const SUMMARY_FILE: &str = "summary.json";

/// File name prefix of issue records.
pub const ISSUE_FILE_PREFIX: &str = "issue_";

/// File name prefix of discussion records.
pub const DISCUSSION_FILE_PREFIX: &str = "discussion_";

/// Extension of every record file.
pub const RECORD_EXTENSION: &str = "json";

/// Paths of one repository's archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivePaths {
    /// `<data_dir>/<owner>_<repo>`
    pub base_dir: PathBuf,
}

impl ArchivePaths {
    /// Compute the archive location for `slug` under `data_dir`.
    pub fn new(data_dir: &Path, slug: &RepoSlug) -> Self {
        Self {
            base_dir: data_dir.join(slug.dir_name()),
        }
    }

    /// Combined summary for the whole fetch.
    pub fn summary_path(&self) -> PathBuf {
        self.base_dir.join(SUMMARY_FILE)
    }

    /// Directory holding issue records.
    pub fn issues_dir(&self) -> PathBuf {
        self.base_dir.join("issues")
    }

    /// Record file for one issue.
    pub fn issue_path(&self, number: IssueNumber) -> PathBuf {
        self.issues_dir().join(issue_file_name(number))
    }

    /// Issue rollup summary.
    pub fn issues_summary_path(&self) -> PathBuf {
        self.issues_dir().join(SUMMARY_FILE)
    }

    /// Directory holding discussion records.
    pub fn discussions_dir(&self) -> PathBuf {
        self.base_dir.join("discussions")
    }

    /// Record file for one discussion.
    pub fn discussion_path(&self, number: IssueNumber) -> PathBuf {
        self.discussions_dir()
            .join(format!("{DISCUSSION_FILE_PREFIX}{number}.{RECORD_EXTENSION}"))
    }

    /// Discussion rollup summary.
    pub fn discussions_summary_path(&self) -> PathBuf {
        self.discussions_dir().join(SUMMARY_FILE)
    }
}

/// File name of an issue record.
pub fn issue_file_name(number: IssueNumber) -> String {
    format!("{ISSUE_FILE_PREFIX}{number}.{RECORD_EXTENSION}")
}

/// Whether `file_name` follows the issue record naming convention.
///
/// Matches `issue_*.json`; summaries and other files are excluded.
pub fn is_issue_file_name(file_name: &str) -> bool {
    file_name.starts_with(ISSUE_FILE_PREFIX)
        && Path::new(file_name)
            .extension()
            .is_some_and(|ext| ext == RECORD_EXTENSION)
}
