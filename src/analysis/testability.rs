//! analysis::testability
//!
//! Resolve one testing strategy per issue.
//!
//! Each topical category maps to a [`TestabilityTag`]; a category without a
//! mapping counts as [`TestabilityTag::DEFAULT`]. An issue in several
//! categories takes the most restrictive of their tags, and an issue only in
//! `other` gets the default.

use std::collections::HashMap;
use std::fmt;

use super::tables::{OTHER_TAG, TESTABILITY_MAP};
use super::{CategoryAssignment, TestabilityAssignment};
use crate::core::record::IssueRecord;
use crate::core::types::IssueNumber;

/// Testing strategy needed to catch a bug.
///
/// Variants are declared from least to most restrictive; the derived `Ord`
/// is the restrictiveness order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TestabilityTag {
    Automated,
    DeviceMatrix,
    ManualWorkflow,
    EnvironmentDependent,
}

impl TestabilityTag {
    /// Report order.
    pub const ALL: [TestabilityTag; 4] = [
        TestabilityTag::Automated,
        TestabilityTag::DeviceMatrix,
        TestabilityTag::ManualWorkflow,
        TestabilityTag::EnvironmentDependent,
    ];

    /// Tag for issues no mapped category reaches.
    pub const DEFAULT: TestabilityTag = TestabilityTag::ManualWorkflow;

    pub fn as_str(&self) -> &'static str {
        match self {
            TestabilityTag::Automated => "automated_tests_could_catch",
            TestabilityTag::DeviceMatrix => "device_matrix_testing_needed",
            TestabilityTag::ManualWorkflow => "manual_workflow_testing_needed",
            TestabilityTag::EnvironmentDependent => "environment_dependent_hard_to_test",
        }
    }
}

impl fmt::Display for TestabilityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category tag to testability tag.
#[derive(Debug, Clone, Default)]
pub struct TestabilityMap {
    tags: HashMap<String, TestabilityTag>,
}

impl TestabilityMap {
    pub fn new<'a>(entries: impl IntoIterator<Item = (&'a str, TestabilityTag)>) -> Self {
        Self {
            tags: entries
                .into_iter()
                .map(|(category, tag)| (category.to_string(), tag))
                .collect(),
        }
    }

    pub fn standard() -> Self {
        Self::new(TESTABILITY_MAP.iter().copied())
    }

    pub fn tag_for(&self, category: &str) -> Option<TestabilityTag> {
        self.tags.get(category).copied()
    }
}

/// Assign every issue to exactly one testability bucket.
pub fn resolve_testability(
    issues: &[IssueRecord],
    categories: &CategoryAssignment,
    map: &TestabilityMap,
) -> TestabilityAssignment {
    let mut strictest: HashMap<IssueNumber, TestabilityTag> = HashMap::new();

    for (category, members) in categories.iter() {
        if category == OTHER_TAG {
            continue;
        }
        let tag = map.tag_for(category).unwrap_or(TestabilityTag::DEFAULT);
        for &number in members {
            strictest
                .entry(number)
                .and_modify(|current| *current = (*current).max(tag))
                .or_insert(tag);
        }
    }

    let mut testability = TestabilityAssignment::with_keys(TestabilityTag::ALL);
    for issue in issues {
        let tag = strictest
            .get(&issue.number)
            .copied()
            .unwrap_or(TestabilityTag::DEFAULT);
        testability.insert(tag, issue.number);
    }
    testability
}
