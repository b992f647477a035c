//! core::record
//!
//! Issue and discussion records as fetched from the forge and stored in the
//! archive.
//!
//! # Wire Compatibility
//!
//! [`IssueRecord`] uses the field names of the GitHub REST issues API and
//! [`DiscussionRecord`] the field names of the GraphQL discussions query, so
//! an archive written from raw API responses loads without conversion.
//! Fields the tool does not read are kept in `extra` and written back
//! unchanged, so a stored record is the record the API returned.
//!
//! Records are immutable once fetched: nothing in the crate mutates a record
//! after deserialization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::types::{IssueNumber, IssueState};

/// A label attached to an issue or discussion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
        }
    }
}

/// Author of an issue, discussion, or comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub login: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An issue record.
///
/// # Example
///
/// ```
/// use bugsift::core::record::IssueRecord;
///
/// let json = r#"{
///     "number": 7,
///     "title": "Crash on launch",
///     "body": null,
///     "state": "open",
///     "labels": [{"name": "Bug"}],
///     "created_at": "2025-01-01T00:00:00Z",
///     "html_url": "https://github.com/o/r/issues/7"
/// }"#;
///
/// let issue: IssueRecord = serde_json::from_str(json).unwrap();
/// assert!(issue.has_label("bug"));
/// assert_eq!(issue.body_text(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
    pub number: IssueNumber,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    pub state: IssueState,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub closed_at: Option<String>,
    #[serde(default)]
    pub user: Option<Author>,
    /// Remaining API fields (assignees, milestone, reactions, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IssueRecord {
    /// Body text, with a missing body treated as empty.
    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }

    /// Whether the issue is open.
    pub fn is_open(&self) -> bool {
        self.state == IssueState::Open
    }

    /// Label names in their stored order.
    pub fn label_names(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|l| l.name.as_str())
    }

    /// Whether the issue carries `label`, compared case-insensitively.
    pub fn has_label(&self, label: &str) -> bool {
        self.label_names().any(|name| name.eq_ignore_ascii_case(label))
    }
}

/// A GraphQL `nodes` connection wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nodes<T> {
    pub nodes: Vec<T>,
}

impl<T> Default for Nodes<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

/// Discussion category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscussionCategory {
    pub name: String,
}

/// A comment on a discussion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscussionComment {
    pub id: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub author: Option<Author>,
}

/// A discussion record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscussionRecord {
    pub id: String,
    pub number: IssueNumber,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub closed_at: Option<String>,
    pub closed: bool,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub category: Option<DiscussionCategory>,
    #[serde(default)]
    pub labels: Nodes<Label>,
    #[serde(default)]
    pub comments: Nodes<DiscussionComment>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DiscussionRecord {
    /// Category name, if the discussion has one.
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }

    /// Comments in their fetched order.
    pub fn comments(&self) -> &[DiscussionComment] {
        &self.comments.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue_json() -> &'static str {
        r#"{
            "url": "https://api.github.com/repos/o/r/issues/12",
            "number": 12,
            "title": "Pairing fails",
            "body": "Steps to reproduce",
            "state": "closed",
            "labels": [{"id": 1, "name": "bug", "color": "d73a4a"}, {"name": "android"}],
            "user": {"login": "octocat", "id": 1},
            "created_at": "2025-03-01T12:00:00Z",
            "updated_at": "2025-03-02T12:00:00Z",
            "closed_at": "2025-03-03T12:00:00Z",
            "html_url": "https://github.com/o/r/issues/12",
            "comments": 4
        }"#
    }

    #[test]
    fn issue_ignores_unknown_fields() {
        let issue: IssueRecord = serde_json::from_str(issue_json()).unwrap();
        assert_eq!(issue.number, IssueNumber(12));
        assert_eq!(issue.state, IssueState::Closed);
        assert_eq!(issue.label_names().collect::<Vec<_>>(), ["bug", "android"]);
        assert_eq!(issue.user.as_ref().unwrap().login, "octocat");
        assert!(!issue.is_open());
    }

    #[test]
    fn issue_keeps_unread_fields_on_write() {
        let issue: IssueRecord = serde_json::from_str(issue_json()).unwrap();
        assert_eq!(issue.extra["comments"], 4);

        let value = serde_json::to_value(&issue).unwrap();
        let original: Value = serde_json::from_str(issue_json()).unwrap();
        assert_eq!(value, original);
    }

    #[test]
    fn issue_missing_optional_fields() {
        let issue: IssueRecord =
            serde_json::from_str(r#"{"number": 1, "state": "open"}"#).unwrap();
        assert_eq!(issue.title, "");
        assert_eq!(issue.body_text(), "");
        assert!(issue.labels.is_empty());
        assert!(issue.is_open());
    }

    #[test]
    fn issue_requires_number_and_state() {
        assert!(serde_json::from_str::<IssueRecord>(r#"{"state": "open"}"#).is_err());
        assert!(serde_json::from_str::<IssueRecord>(r#"{"number": 1}"#).is_err());
    }

    #[test]
    fn has_label_is_case_insensitive() {
        let mut issue: IssueRecord = serde_json::from_str(issue_json()).unwrap();
        issue.labels = vec![Label::new("BUG")];
        assert!(issue.has_label("bug"));
        assert!(!issue.has_label("bugfix"));
    }

    #[test]
    fn discussion_reads_graphql_shape() {
        let json = r#"{
            "id": "D_kwDO",
            "number": 3,
            "title": "How do I pair?",
            "body": "Question",
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": null,
            "closedAt": null,
            "closed": false,
            "url": "https://github.com/o/r/discussions/3",
            "author": {"login": "someone"},
            "category": {"name": "Q&A"},
            "labels": {"nodes": [{"name": "help"}]},
            "comments": {"nodes": [
                {"id": "DC_1", "body": "Try again", "createdAt": "2025-01-02T00:00:00Z", "author": null}
            ]}
        }"#;

        let discussion: DiscussionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(discussion.number, IssueNumber(3));
        assert_eq!(discussion.category_name(), Some("Q&A"));
        assert_eq!(discussion.comments().len(), 1);
        assert_eq!(discussion.comments()[0].body, "Try again");
        assert!(discussion.comments()[0].author.is_none());
        assert!(!discussion.closed);
    }

    #[test]
    fn discussion_serializes_camel_case() {
        let discussion = DiscussionRecord {
            id: "D_1".into(),
            number: IssueNumber(1),
            title: "t".into(),
            body: String::new(),
            created_at: "2025-01-01T00:00:00Z".into(),
            updated_at: None,
            closed_at: None,
            closed: true,
            url: "https://github.com/o/r/discussions/1".into(),
            author: None,
            category: None,
            labels: Nodes::default(),
            comments: Nodes::default(),
            extra: Map::new(),
        };

        let value = serde_json::to_value(&discussion).unwrap();
        assert_eq!(value["createdAt"], "2025-01-01T00:00:00Z");
        assert_eq!(value["closed"], true);
        assert!(value["comments"]["nodes"].as_array().unwrap().is_empty());
    }
}
