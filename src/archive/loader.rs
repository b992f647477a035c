//! archive::loader
//!
//! Load issue records from an archive directory.
//!
//! # Recovery
//!
//! A file that cannot be read or parsed is skipped with a warning and
//! reported in [`LoadOutcome::skipped`]; it never aborts the load. Only a
//! missing or unreadable directory is an error.
//!
//! # Ordering
//!
//! Loaded records are ordered by issue number, newest (highest) first, so
//! downstream output does not depend on directory iteration order.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::ArchiveError;
use crate::core::paths::is_issue_file_name;
use crate::core::record::IssueRecord;

/// A record file that was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of loading a directory.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    /// Records that loaded and passed the filter.
    pub issues: Vec<IssueRecord>,
    /// Record files examined.
    pub scanned: usize,
    /// Record files that could not be loaded.
    pub skipped: Vec<SkippedRecord>,
}

/// A directory of `issue_<number>.json` files.
#[derive(Debug, Clone)]
pub struct IssueDirectory {
    dir: PathBuf,
}

impl IssueDirectory {
    /// Open an issue directory.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::MissingDirectory` if `dir` is not a directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, ArchiveError> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(ArchiveError::MissingDirectory(dir));
        }
        Ok(Self { dir })
    }

    /// Directory path.
    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Load every issue record.
    pub fn load_all(&self) -> Result<LoadOutcome, ArchiveError> {
        self.load_matching(|_| true)
    }

    /// Load the issues carrying `label` (case-insensitive).
    pub fn load_bug_issues(&self, label: &str) -> Result<LoadOutcome, ArchiveError> {
        self.load_matching(|issue| issue.has_label(label))
    }

    fn load_matching(
        &self,
        keep: impl Fn(&IssueRecord) -> bool,
    ) -> Result<LoadOutcome, ArchiveError> {
        let mut outcome = LoadOutcome::default();

        for path in self.record_files()? {
            outcome.scanned += 1;
            match read_issue(&path) {
                Ok(issue) if keep(&issue) => outcome.issues.push(issue),
                Ok(issue) => debug!(number = %issue.number, "issue filtered out"),
                Err(reason) => {
                    warn!(path = %path.display(), %reason, "skipping malformed issue record");
                    outcome.skipped.push(SkippedRecord { path, reason });
                }
            }
        }

        outcome
            .issues
            .sort_by(|a, b| b.number.cmp(&a.number));
        Ok(outcome)
    }

    /// Paths of files named like issue records.
    fn record_files(&self) -> Result<Vec<PathBuf>, ArchiveError> {
        let read_err = |source| ArchiveError::Read {
            path: self.dir.clone(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if is_issue_file_name(name) && entry.path().is_file() {
                files.push(entry.path());
            }
        }
        files.sort();
        Ok(files)
    }
}

fn read_issue(path: &Path) -> Result<IssueRecord, String> {
    let contents = fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&contents).map_err(|e| e.to_string())
}
