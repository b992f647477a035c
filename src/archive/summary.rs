//! archive::summary
//!
//! Rollup summaries written next to fetched records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::record::{DiscussionRecord, IssueRecord};
use crate::core::types::{IssueNumber, IssueState, RepoSlug};

/// Open/closed counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    pub total: usize,
    pub open: usize,
    pub closed: usize,
}

impl Counts {
    /// Count issues by state.
    pub fn of_issues(issues: &[IssueRecord]) -> Self {
        let open = issues.iter().filter(|i| i.state == IssueState::Open).count();
        let closed = issues.iter().filter(|i| i.state == IssueState::Closed).count();
        Self {
            total: issues.len(),
            open,
            closed,
        }
    }

    /// Count discussions by their closed flag.
    pub fn of_discussions(discussions: &[DiscussionRecord]) -> Self {
        let closed = discussions.iter().filter(|d| d.closed).count();
        Self {
            total: discussions.len(),
            open: discussions.len() - closed,
            closed,
        }
    }
}

/// One line of the issue rollup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSummaryEntry {
    pub number: IssueNumber,
    pub title: String,
    pub state: IssueState,
    pub created_at: String,
    pub url: String,
}

/// `issues/summary.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuesSummary {
    pub total_count: usize,
    pub open_count: usize,
    pub closed_count: usize,
    pub fetched_at: DateTime<Utc>,
    pub issues: Vec<IssueSummaryEntry>,
}

impl IssuesSummary {
    pub fn new(issues: &[IssueRecord], fetched_at: DateTime<Utc>) -> Self {
        let counts = Counts::of_issues(issues);
        Self {
            total_count: counts.total,
            open_count: counts.open,
            closed_count: counts.closed,
            fetched_at,
            issues: issues
                .iter()
                .map(|i| IssueSummaryEntry {
                    number: i.number,
                    title: i.title.clone(),
                    state: i.state,
                    created_at: i.created_at.clone(),
                    url: i.html_url.clone(),
                })
                .collect(),
        }
    }
}

/// One line of the discussion rollup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscussionSummaryEntry {
    pub number: IssueNumber,
    pub title: String,
    pub closed: bool,
    pub created_at: String,
    pub url: String,
}

/// `discussions/summary.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscussionsSummary {
    pub total_count: usize,
    pub open_count: usize,
    pub closed_count: usize,
    pub fetched_at: DateTime<Utc>,
    pub discussions: Vec<DiscussionSummaryEntry>,
}

impl DiscussionsSummary {
    pub fn new(discussions: &[DiscussionRecord], fetched_at: DateTime<Utc>) -> Self {
        let counts = Counts::of_discussions(discussions);
        Self {
            total_count: counts.total,
            open_count: counts.open,
            closed_count: counts.closed,
            fetched_at,
            discussions: discussions
                .iter()
                .map(|d| DiscussionSummaryEntry {
                    number: d.number,
                    title: d.title.clone(),
                    closed: d.closed,
                    created_at: d.created_at.clone(),
                    url: d.url.clone(),
                })
                .collect(),
        }
    }
}

/// Top-level `summary.json` for a fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedSummary {
    pub repository: RepoSlug,
    pub fetched_at: DateTime<Utc>,
    pub issues: Counts,
    pub discussions: Counts,
}

impl CombinedSummary {
    pub fn new(
        repository: RepoSlug,
        issues: &[IssueRecord],
        discussions: &[DiscussionRecord],
        fetched_at: DateTime<Utc>,
    ) -> Self {
        Self {
            repository,
            fetched_at,
            issues: Counts::of_issues(issues),
            discussions: Counts::of_discussions(discussions),
        }
    }
}
