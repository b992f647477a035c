//! forge::mock
//!
//! Mock forge implementation for deterministic testing.
//!
//! # Design
//!
//! The mock forge provides a deterministic implementation of the `Forge` trait
//! for use in tests. It serves issues and discussions from memory and allows
//! configuring failure scenarios.
//!
//! # Example
//!
//! ```
//! use bugsift::forge::mock::MockForge;
//! use bugsift::forge::{Forge, ListIssuesOpts};
//!
//! # tokio_test::block_on(async {
//! let forge = MockForge::new();
//! let issues = forge.list_issues(ListIssuesOpts::default()).await.unwrap();
//! assert!(issues.is_empty());
//! # });
//! ```

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::traits::{Forge, ForgeError, ListIssuesOpts, ListingError, StateFilter};
use crate::core::record::{DiscussionRecord, IssueRecord};
use crate::core::types::IssueState;

/// Mock forge for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone, Default)]
pub struct MockForge {
    /// Internal state shared across clones.
    inner: Arc<Mutex<MockForgeInner>>,
}

/// Internal mutable state.
#[derive(Debug, Default)]
struct MockForgeInner {
    issues: Vec<IssueRecord>,
    discussions: Vec<DiscussionRecord>,
    /// Method to fail on (for testing error paths).
    fail_on: Option<FailOn>,
    /// Recorded operations for verification.
    operations: Vec<MockOperation>,
}

/// Configuration for which operation should fail.
///
/// `ListIssuesAfter` hands back its first `after` issues as the partial
/// result, like a listing that fails on a later page.
#[derive(Debug, Clone)]
pub enum FailOn {
    /// Fail list_issues with the given error.
    ListIssues(ForgeError),
    /// Fail list_discussions with the given error.
    ListDiscussions(ForgeError),
    /// Fail list_issues after serving `after` issues.
    ListIssuesAfter { after: usize, error: ForgeError },
}

/// Recorded operation for test verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOperation {
    ListIssues { state: StateFilter },
    ListDiscussions,
}

impl MockForge {
    /// Create a new empty mock forge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock forge serving the given issues.
    pub fn with_issues(issues: Vec<IssueRecord>) -> Self {
        let forge = Self::new();
        forge.inner.lock().unwrap().issues = issues;
        forge
    }

    /// Add discussions to serve.
    pub fn and_discussions(self, discussions: Vec<DiscussionRecord>) -> Self {
        self.inner.lock().unwrap().discussions = discussions;
        self
    }

    /// Configure the mock to fail on a specific operation.
    ///
    /// # Example
    ///
    /// ```
    /// use bugsift::forge::mock::{FailOn, MockForge};
    /// use bugsift::forge::ForgeError;
    ///
    /// let forge = MockForge::new().fail_on(FailOn::ListIssues(ForgeError::RateLimited));
    /// ```
    pub fn fail_on(self, fail_on: FailOn) -> Self {
        self.inner.lock().unwrap().fail_on = Some(fail_on);
        self
    }

    /// Clear the failure configuration.
    pub fn clear_fail_on(&self) {
        self.inner.lock().unwrap().fail_on = None;
    }

    /// Get all recorded operations.
    pub fn operations(&self) -> Vec<MockOperation> {
        self.inner.lock().unwrap().operations.clone()
    }

    fn record(&self, op: MockOperation) {
        self.inner.lock().unwrap().operations.push(op);
    }
}

#[async_trait]
impl Forge for MockForge {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn list_issues(
        &self,
        opts: ListIssuesOpts,
    ) -> Result<Vec<IssueRecord>, ListingError<IssueRecord>> {
        self.record(MockOperation::ListIssues { state: opts.state });

        let inner = self.inner.lock().unwrap();
        let mut issues: Vec<IssueRecord> = inner
            .issues
            .iter()
            .filter(|issue| match opts.state {
                StateFilter::All => true,
                StateFilter::Open => issue.state == IssueState::Open,
                StateFilter::Closed => issue.state == IssueState::Closed,
            })
            .cloned()
            .collect();

        match &inner.fail_on {
            Some(FailOn::ListIssues(e)) => Err(e.clone().into()),
            Some(FailOn::ListIssuesAfter { after, error }) => {
                issues.truncate(*after);
                ListingError::finish(issues, Err(error.clone()))
            }
            _ => Ok(issues),
        }
    }

    async fn list_discussions(
        &self,
    ) -> Result<Vec<DiscussionRecord>, ListingError<DiscussionRecord>> {
        self.record(MockOperation::ListDiscussions);

        let inner = self.inner.lock().unwrap();
        if let Some(FailOn::ListDiscussions(e)) = &inner.fail_on {
            return Err(e.clone().into());
        }
        Ok(inner.discussions.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::IssueNumber;

    fn issue(number: u64, state: IssueState) -> IssueRecord {
        IssueRecord {
            number: IssueNumber(number),
            title: format!("Issue {}", number),
            body: None,
            state,
            labels: vec![],
            created_at: String::new(),
            html_url: String::new(),
            updated_at: None,
            closed_at: None,
            user: None,
            extra: Default::default(),
        }
    }

    #[tokio::test]
    async fn filters_by_state() {
        let forge = MockForge::with_issues(vec![
            issue(1, IssueState::Open),
            issue(2, IssueState::Closed),
        ]);

        let all = forge.list_issues(ListIssuesOpts::default()).await.unwrap();
        assert_eq!(all.len(), 2);

        let open = forge
            .list_issues(ListIssuesOpts {
                state: StateFilter::Open,
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].number, IssueNumber(1));
    }

    #[tokio::test]
    async fn records_operations() {
        let forge = MockForge::new();
        forge.list_issues(ListIssuesOpts::default()).await.unwrap();
        forge.list_discussions().await.unwrap();

        assert_eq!(
            forge.operations(),
            vec![
                MockOperation::ListIssues {
                    state: StateFilter::All
                },
                MockOperation::ListDiscussions,
            ]
        );
    }

    #[tokio::test]
    async fn configured_failure() {
        let forge = MockForge::new().fail_on(FailOn::ListDiscussions(ForgeError::RateLimited));

        assert!(forge.list_issues(ListIssuesOpts::default()).await.is_ok());
        let err = forge.list_discussions().await.unwrap_err();
        assert!(matches!(err.error, ForgeError::RateLimited));
        assert!(err.fetched.is_empty());

        forge.clear_fail_on();
        assert!(forge.list_discussions().await.is_ok());
    }

    #[tokio::test]
    async fn failure_after_some_issues_keeps_them() {
        let forge = MockForge::with_issues(vec![
            issue(3, IssueState::Open),
            issue(2, IssueState::Open),
            issue(1, IssueState::Closed),
        ])
        .fail_on(FailOn::ListIssuesAfter {
            after: 2,
            error: ForgeError::RateLimited,
        });

        let err = forge
            .list_issues(ListIssuesOpts::default())
            .await
            .unwrap_err();
        let numbers: Vec<_> = err.fetched.iter().map(|i| i.number).collect();
        assert_eq!(numbers, vec![IssueNumber(3), IssueNumber(2)]);
    }
}
