//! analysis::topical
//!
//! Topical classification. An issue joins every category with a matching
//! pattern; issues matching none go to [`OTHER_TAG`].

use super::matcher::RuleSet;
use super::tables::OTHER_TAG;
use super::CategoryAssignment;
use crate::core::record::IssueRecord;

/// Text the topical and hardware classifiers look at.
pub fn classification_text(issue: &IssueRecord) -> String {
    format!(
        "{} {}",
        issue.title.to_lowercase(),
        issue.body_text().to_lowercase()
    )
}

/// Assign each issue to its matching categories.
///
/// Buckets for every rule plus `other` are present in the result even when
/// empty.
pub fn classify_topics(issues: &[IssueRecord], rules: &RuleSet) -> CategoryAssignment {
    let mut categories = CategoryAssignment::with_keys(
        rules
            .tags()
            .chain(std::iter::once(OTHER_TAG))
            .map(str::to_string),
    );

    for issue in issues {
        let text = classification_text(issue);
        let mut matched = false;
        for tag in rules.matching_tags(&text) {
            categories.insert(tag.to_string(), issue.number);
            matched = true;
        }
        if !matched {
            categories.insert(OTHER_TAG.to_string(), issue.number);
        }
    }

    categories
}
