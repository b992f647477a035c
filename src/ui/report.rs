//! ui::report
//!
//! Plain-text bug analysis report.
//!
//! Rendering is pure: it reads an [`Analysis`] and the issues it was built
//! from and writes text. Category and platform percentages are guarded
//! against an empty whole; a line whose percentage cannot be computed is
//! left out.

use std::collections::HashMap;
use std::fmt::{self, Write};

use crate::analysis::{Analysis, Buckets, TestabilityTag};
use crate::archive::summary::Counts;
use crate::core::record::IssueRecord;
use crate::core::types::IssueNumber;

const RULE_WIDTH: usize = 60;
const SAMPLES_PER_CATEGORY: usize = 3;

/// `part / whole` as a percentage, `None` when `whole` is zero.
pub fn percentage(part: usize, whole: usize) -> Option<f64> {
    if whole == 0 {
        None
    } else {
        Some(part as f64 / whole as f64 * 100.0)
    }
}

/// `"even_realities_g1"` to `"Even Realities G1"`.
///
/// `_` and `-` become spaces. A letter is upper-cased when it follows a
/// non-letter and lower-cased otherwise, so `mach1` stays `Mach1`.
pub fn title_case(tag: &str) -> String {
    let mut out = String::with_capacity(tag.len());
    let mut prev_is_letter = false;
    for c in tag.chars() {
        let c = if c == '_' || c == '-' { ' ' } else { c };
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

/// Header line for a report about `name` (usually the repository name).
pub fn report_title(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("{} BUG ANALYSIS REPORT", name.to_uppercase()),
        None => "BUG ANALYSIS REPORT".to_string(),
    }
}

/// A report ready to display.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub title: &'a str,
    pub issues: &'a [IssueRecord],
    pub analysis: &'a Analysis,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(f, self.title, self.issues, self.analysis)
    }
}

/// Render the full report into a `String`.
pub fn render_report(title: &str, issues: &[IssueRecord], analysis: &Analysis) -> String {
    Report {
        title,
        issues,
        analysis,
    }
    .to_string()
}

/// Render the full report into `out`.
pub fn write_report<W: Write>(
    out: &mut W,
    title: &str,
    issues: &[IssueRecord],
    analysis: &Analysis,
) -> fmt::Result {
    let rule = "=".repeat(RULE_WIDTH);
    let total = issues.len();
    let counts = Counts::of_issues(issues);

    writeln!(out, "\n{}", rule)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", rule)?;

    writeln!(out, "\nTOTAL BUG ISSUES: {}", total)?;
    writeln!(out, "OPEN: {} | CLOSED: {}", counts.open, counts.closed)?;

    writeln!(out, "\nBUG CATEGORIES:")?;
    let categorized = analysis.categories.total_memberships();
    write_breakdown(out, &analysis.categories, categorized, |k| title_case(k))?;

    writeln!(out, "\nPLATFORM BREAKDOWN:")?;
    write_breakdown(out, &analysis.platforms, total, |p| title_case(p.as_str()))?;

    writeln!(out, "\nHARDWARE MODEL BREAKDOWN:")?;
    write_breakdown(out, &analysis.hardware, total, |k| title_case(k))?;

    writeln!(out, "\nTESTING STRATEGY ANALYSIS:")?;
    writeln!(out, "How these bugs could be caught:")?;
    write_breakdown(out, &analysis.testability, total, |t| title_case(t.as_str()))?;

    writeln!(out, "\nTOP OPEN BUGS BY CATEGORY:")?;
    write_open_samples(out, issues, &analysis.categories)?;

    writeln!(out, "\n{}", rule)?;
    writeln!(out, "KEY INSIGHTS FOR TESTING STRATEGY")?;
    writeln!(out, "{}", rule)?;
    write_insights(out, &analysis.testability, total)
}

/// One `  Label: n (p%)` line per non-empty bucket.
fn write_breakdown<W: Write, K: PartialEq>(
    out: &mut W,
    buckets: &Buckets<K>,
    whole: usize,
    label: impl Fn(&K) -> String,
) -> fmt::Result {
    for (key, members) in buckets.non_empty() {
        if let Some(pct) = percentage(members.len(), whole) {
            writeln!(out, "  {}: {} ({:.1}%)", label(key), members.len(), pct)?;
        }
    }
    Ok(())
}

fn write_open_samples<W: Write>(
    out: &mut W,
    issues: &[IssueRecord],
    categories: &Buckets<String>,
) -> fmt::Result {
    let by_number: HashMap<IssueNumber, &IssueRecord> =
        issues.iter().map(|i| (i.number, i)).collect();

    for (category, members) in categories.iter() {
        let open: Vec<&IssueRecord> = members
            .iter()
            .filter_map(|n| by_number.get(n).copied())
            .filter(|i| i.is_open())
            .take(SAMPLES_PER_CATEGORY)
            .collect();
        if open.is_empty() {
            continue;
        }

        writeln!(out, "\n{} (Open Issues):", title_case(category))?;
        for (idx, issue) in open.iter().enumerate() {
            writeln!(out, "  {}. #{}: {}", idx + 1, issue.number, issue.title)?;
        }
    }
    Ok(())
}

fn write_insights<W: Write>(
    out: &mut W,
    testability: &Buckets<TestabilityTag>,
    total: usize,
) -> fmt::Result {
    let pct = |tag: TestabilityTag| percentage(testability.count(&tag), total);

    let (Some(device), Some(environment), Some(manual), Some(automated)) = (
        pct(TestabilityTag::DeviceMatrix),
        pct(TestabilityTag::EnvironmentDependent),
        pct(TestabilityTag::ManualWorkflow),
        pct(TestabilityTag::Automated),
    ) else {
        return writeln!(out, "\n• No bug issues to analyze");
    };

    writeln!(out, "\n• {:.0}% need device matrix testing", device)?;
    writeln!(
        out,
        "• {:.0}% are environment-dependent (hard to automate)",
        environment
    )?;
    writeln!(out, "• {:.0}% need manual workflow testing", manual)?;
    writeln!(out, "• {:.0}% could be caught by automated tests", automated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Classifier;
    use crate::core::record::Label;
    use crate::core::types::IssueState;

    fn issue(number: u64, title: &str, state: IssueState) -> IssueRecord {
        IssueRecord {
            number: IssueNumber(number),
            title: title.into(),
            body: None,
            state,
            labels: vec![Label::new("bug")],
            created_at: String::new(),
            html_url: String::new(),
            updated_at: None,
            closed_at: None,
            user: None,
            extra: Default::default(),
        }
    }

    fn render(issues: &[IssueRecord]) -> String {
        let analysis = Classifier::standard().unwrap().analyze(issues);
        render_report(&report_title(Some("demo")), issues, &analysis)
    }

    mod labels {
        use super::*;

        #[test]
        fn title_case_tags() {
            assert_eq!(title_case("even_realities_g1"), "Even Realities G1");
            assert_eq!(title_case("mentra_mach1"), "Mentra Mach1");
            assert_eq!(title_case("ios"), "Ios");
            assert_eq!(
                title_case("environment_dependent_hard_to_test"),
                "Environment Dependent Hard To Test"
            );
            assert_eq!(title_case("wifi-connectivity"), "Wifi Connectivity");
        }

        #[test]
        fn percentage_guards_zero() {
            assert_eq!(percentage(1, 0), None);
            assert_eq!(percentage(1, 4), Some(25.0));
        }

        #[test]
        fn titles() {
            assert_eq!(report_title(Some("MentraOS")), "MENTRAOS BUG ANALYSIS REPORT");
            assert_eq!(report_title(None), "BUG ANALYSIS REPORT");
        }
    }

    mod sections {
        use super::*;

        #[test]
        fn display_matches_render() {
            let issues = vec![issue(1, "Bluetooth pairing fails", IssueState::Open)];
            let analysis = Classifier::standard().unwrap().analyze(&issues);
            let report = Report {
                title: "DEMO BUG ANALYSIS REPORT",
                issues: &issues,
                analysis: &analysis,
            };

            assert_eq!(format!("{}", report), render(&issues));
        }

        #[test]
        fn totals_and_breakdowns() {
            let issues = vec![
                issue(2, "Random minor typo", IssueState::Closed),
                issue(1, "App crashes on Android after Bluetooth pairing", IssueState::Open),
            ];
            let report = render(&issues);

            assert!(report.contains("DEMO BUG ANALYSIS REPORT"));
            assert!(report.contains("TOTAL BUG ISSUES: 2"));
            assert!(report.contains("OPEN: 1 | CLOSED: 1"));
            // 3 memberships: bluetooth_pairing, app_crashes, other
            assert!(report.contains("  Bluetooth Pairing: 1 (33.3%)"));
            assert!(report.contains("  Other: 1 (33.3%)"));
            assert!(report.contains("  Android: 1 (50.0%)"));
            assert!(report.contains("  Unspecified: 1 (50.0%)"));
            assert!(report.contains("  Device Matrix Testing Needed: 1 (50.0%)"));
            assert!(report.contains("  Manual Workflow Testing Needed: 1 (50.0%)"));
            assert!(!report.contains("Automated Tests Could Catch:"));
        }

        #[test]
        fn open_samples_only() {
            let issues = vec![
                issue(2, "Random minor typo", IssueState::Closed),
                issue(1, "App crashes on Android after Bluetooth pairing", IssueState::Open),
            ];
            let report = render(&issues);

            assert!(report.contains("Bluetooth Pairing (Open Issues):"));
            assert!(report.contains("  1. #1: App crashes on Android after Bluetooth pairing"));
            assert!(!report.contains("Other (Open Issues):"));
        }

        #[test]
        fn at_most_three_samples() {
            let issues: Vec<_> = (1..=5)
                .map(|n| issue(n, "Typo number", IssueState::Open))
                .collect();
            let report = render(&issues);

            assert!(report.contains("  3. #3: Typo number"));
            assert!(!report.contains("  4. #"));
        }

        #[test]
        fn insights() {
            let issues = vec![
                issue(1, "App crashes on Android after Bluetooth pairing", IssueState::Open),
                issue(2, "Random minor typo", IssueState::Open),
                issue(3, "Cloud sync broken", IssueState::Open),
                issue(4, "Stream drops", IssueState::Open),
            ];
            let report = render(&issues);

            assert!(report.contains("KEY INSIGHTS FOR TESTING STRATEGY"));
            assert!(report.contains("• 25% need device matrix testing"));
            assert!(report.contains("• 25% are environment-dependent (hard to automate)"));
            assert!(report.contains("• 25% need manual workflow testing"));
            assert!(report.contains("• 25% could be caught by automated tests"));
        }
    }

    mod empty {
        use super::*;

        #[test]
        fn no_percentages_without_issues() {
            let report = render(&[]);

            assert!(report.contains("TOTAL BUG ISSUES: 0"));
            assert!(report.contains("OPEN: 0 | CLOSED: 0"));
            assert!(!report.contains('%'));
            assert!(report.contains("No bug issues to analyze"));
        }
    }
}
