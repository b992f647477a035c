//! analysis::platform
//!
//! Platform classification. Exactly one bucket per issue.

use std::fmt;

use regex::Regex;

use super::matcher::compile_pattern;
use super::tables::{ANDROID_PATTERN, IOS_PATTERN};
use super::{AnalysisError, PlatformAssignment};
use crate::core::record::IssueRecord;

/// Mobile platform an issue mentions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Android,
    Ios,
    Both,
    Unspecified,
}

impl Platform {
    /// Report order.
    pub const ALL: [Platform; 4] = [
        Platform::Android,
        Platform::Ios,
        Platform::Both,
        Platform::Unspecified,
    ];

    pub fn from_mentions(android: bool, ios: bool) -> Self {
        match (android, ios) {
            (true, true) => Platform::Both,
            (true, false) => Platform::Android,
            (false, true) => Platform::Ios,
            (false, false) => Platform::Unspecified,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Both => "both",
            Platform::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The two platform predicates.
#[derive(Debug, Clone)]
pub struct PlatformMatcher {
    android: Regex,
    ios: Regex,
}

impl PlatformMatcher {
    pub fn new(android: &str, ios: &str) -> Result<Self, AnalysisError> {
        Ok(Self {
            android: compile_pattern(android)?,
            ios: compile_pattern(ios)?,
        })
    }

    pub fn standard() -> Result<Self, AnalysisError> {
        Self::new(ANDROID_PATTERN, IOS_PATTERN)
    }

    /// Classify one issue. Labels are searched along with title and body.
    pub fn platform_of(&self, issue: &IssueRecord) -> Platform {
        let text = platform_text(issue);
        Platform::from_mentions(self.android.is_match(&text), self.ios.is_match(&text))
    }
}

fn platform_text(issue: &IssueRecord) -> String {
    format!(
        "{} {} {}",
        issue.title,
        issue.body_text(),
        issue.label_names().collect::<Vec<_>>().join(" ")
    )
    .to_lowercase()
}

pub fn classify_platforms(issues: &[IssueRecord], matcher: &PlatformMatcher) -> PlatformAssignment {
    let mut platforms = PlatformAssignment::with_keys(Platform::ALL);
    for issue in issues {
        platforms.insert(matcher.platform_of(issue), issue.number);
    }
    platforms
}
