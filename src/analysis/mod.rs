//! analysis
//!
//! Rule-based classification of bug issues.
//!
//! # Modules
//!
//! - [`tables`] - Static pattern and testability tables
//! - [`matcher`] - Compiled rules and `matches_any`
//! - [`buckets`] - Ordered key to issue-number mapping
//! - [`topical`] - Topical categories (non-exclusive, `other` fallback)
//! - [`platform`] - Android / iOS / both / unspecified (exclusive)
//! - [`hardware`] - Hardware models (non-exclusive, `unspecified` fallback)
//! - [`testability`] - Most restrictive testing strategy per issue
//!
//! # Example
//!
//! ```
//! use bugsift::analysis::Classifier;
//!
//! let classifier = Classifier::standard().unwrap();
//! let analysis = classifier.analyze(&[]);
//! assert_eq!(analysis.testability.total_memberships(), 0);
//! ```

pub mod buckets;
pub mod hardware;
pub mod matcher;
pub mod platform;
pub mod tables;
pub mod testability;
pub mod topical;

pub use buckets::Buckets;
pub use platform::{Platform, PlatformMatcher};
pub use testability::{TestabilityMap, TestabilityTag};

use thiserror::Error;

use crate::core::record::IssueRecord;
use matcher::RuleSet;

/// Topical category tag (or `other`) to member issues.
pub type CategoryAssignment = Buckets<String>;

/// Hardware model tag (or `unspecified`) to member issues.
pub type HardwareAssignment = Buckets<String>;

/// Platform to member issues. Exclusive.
pub type PlatformAssignment = Buckets<Platform>;

/// Testability tag to member issues. Exclusive.
pub type TestabilityAssignment = Buckets<TestabilityTag>;

/// Errors from building classifiers.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

/// The four assignments for one issue set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub categories: CategoryAssignment,
    pub platforms: PlatformAssignment,
    pub hardware: HardwareAssignment,
    pub testability: TestabilityAssignment,
}

/// Compiled tables, ready to classify.
#[derive(Debug, Clone)]
pub struct Classifier {
    topical: RuleSet,
    hardware: RuleSet,
    platform: PlatformMatcher,
    testability: TestabilityMap,
}

impl Classifier {
    pub fn new(
        topical: RuleSet,
        hardware: RuleSet,
        platform: PlatformMatcher,
        testability: TestabilityMap,
    ) -> Self {
        Self {
            topical,
            hardware,
            platform,
            testability,
        }
    }

    /// Classifier over the built-in tables.
    pub fn standard() -> Result<Self, AnalysisError> {
        Ok(Self::new(
            RuleSet::compile(tables::TOPICAL_CATEGORIES)?,
            RuleSet::compile(tables::HARDWARE_MODELS)?,
            PlatformMatcher::standard()?,
            TestabilityMap::standard(),
        ))
    }

    /// Run every classifier over `issues`.
    pub fn analyze(&self, issues: &[IssueRecord]) -> Analysis {
        let categories = topical::classify_topics(issues, &self.topical);
        let testability = testability::resolve_testability(issues, &categories, &self.testability);
        Analysis {
            platforms: platform::classify_platforms(issues, &self.platform),
            hardware: hardware::classify_hardware(issues, &self.hardware),
            categories,
            testability,
        }
    }
}
