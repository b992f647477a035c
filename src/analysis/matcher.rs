//! analysis::matcher
//!
//! Compiled pattern rules.

use regex::{Regex, RegexBuilder};

use super::tables::RuleSpec;
use super::AnalysisError;

/// Compile a single case-insensitive pattern.
pub fn compile_pattern(pattern: &str) -> Result<Regex, AnalysisError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| AnalysisError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// True if any of `patterns` finds a match in `text`.
pub fn matches_any(text: &str, patterns: &[Regex]) -> bool {
    patterns.iter().any(|p| p.is_match(text))
}

/// A tag with its compiled patterns.
#[derive(Debug, Clone)]
pub struct Rule {
    pub tag: String,
    pub patterns: Vec<Regex>,
}

impl Rule {
    pub fn matches(&self, text: &str) -> bool {
        matches_any(text, &self.patterns)
    }
}

/// An ordered list of compiled rules.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Compile every rule in `specs`, keeping their order.
    ///
    /// # Errors
    ///
    /// Fails on the first pattern that does not compile.
    pub fn compile(specs: &[RuleSpec]) -> Result<Self, AnalysisError> {
        let rules = specs
            .iter()
            .map(|spec| {
                let patterns = spec
                    .patterns
                    .iter()
                    .map(|p| compile_pattern(p))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Rule {
                    tag: spec.tag.to_string(),
                    patterns,
                })
            })
            .collect::<Result<Vec<_>, AnalysisError>>()?;
        Ok(Self { rules })
    }

    /// Tags in rule order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.tag.as_str())
    }

    /// Tags of every rule matching `text`, in rule order.
    pub fn matching_tags<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.rules
            .iter()
            .filter(move |r| r.matches(text))
            .map(|r| r.tag.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
