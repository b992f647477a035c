//! Integration tests for bug classification and report rendering.

use bugsift::analysis::tables::{RuleSpec, OTHER_TAG};
use bugsift::analysis::matcher::RuleSet;
use bugsift::analysis::topical::classify_topics;
use bugsift::analysis::{Classifier, Platform, TestabilityTag};
use bugsift::core::record::{IssueRecord, Label};
use bugsift::core::types::{IssueNumber, IssueState};
use bugsift::ui::report::{render_report, report_title};

fn bug(number: u64, title: &str, body: &str) -> IssueRecord {
    IssueRecord {
        number: IssueNumber(number),
        title: title.to_string(),
        body: Some(body.to_string()),
        state: IssueState::Open,
        labels: vec![Label::new("bug")],
        created_at: "2025-01-01T00:00:00Z".to_string(),
        html_url: format!("https://github.com/o/r/issues/{}", number),
        updated_at: None,
        closed_at: None,
        user: None,
        extra: Default::default(),
    }
}

fn classifier() -> Classifier {
    Classifier::standard().unwrap()
}

// =============================================================================
// Scenarios
// =============================================================================

mod scenarios {
    use super::*;

    #[test]
    fn crash_after_pairing_on_android() {
        let issues = vec![bug(1, "App crashes on Android after Bluetooth pairing", "")];
        let analysis = classifier().analyze(&issues);

        let topics: Vec<_> = analysis
            .categories
            .keys_of(IssueNumber(1))
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(topics, vec!["bluetooth_pairing", "app_crashes"]);
        assert_eq!(analysis.platforms.get(&Platform::Android), &[IssueNumber(1)]);
        assert_eq!(
            analysis.testability.get(&TestabilityTag::DeviceMatrix),
            &[IssueNumber(1)]
        );
    }

    #[test]
    fn minor_typo() {
        let issues = vec![bug(2, "Random minor typo", "")];
        let analysis = classifier().analyze(&issues);

        assert_eq!(analysis.categories.get(OTHER_TAG), &[IssueNumber(2)]);
        assert_eq!(analysis.categories.total_memberships(), 1);
        assert_eq!(
            analysis.testability.get(&TestabilityTag::ManualWorkflow),
            &[IssueNumber(2)]
        );
    }

    #[test]
    fn pairing_while_streaming_is_environment_dependent() {
        let issues = vec![bug(3, "Bluetooth drops while streaming", "")];
        let analysis = classifier().analyze(&issues);

        assert!(analysis.categories.contains("bluetooth_pairing", IssueNumber(3)));
        assert!(analysis.categories.contains("streaming_media", IssueNumber(3)));
        assert_eq!(
            analysis.testability.get(&TestabilityTag::EnvironmentDependent),
            &[IssueNumber(3)]
        );
        assert_eq!(analysis.testability.total_memberships(), 1);
    }

    #[test]
    fn labels_feed_platform_only() {
        let mut issue = bug(4, "Random minor typo", "");
        issue.labels.push(Label::new("iOS"));
        let analysis = classifier().analyze(&[issue]);

        assert_eq!(analysis.platforms.get(&Platform::Ios), &[IssueNumber(4)]);
        assert!(!analysis.categories.contains("ios_specific", IssueNumber(4)));
    }

    #[test]
    fn missing_body_is_empty_text() {
        let mut issue = bug(5, "Vuzix Z100 display flickers", "");
        issue.body = None;
        let analysis = classifier().analyze(&[issue]);
        assert!(analysis.hardware.contains("vuzix_z100", IssueNumber(5)));
    }
}

// =============================================================================
// Custom tables
// =============================================================================

mod tables {
    use super::*;

    #[test]
    fn classifier_takes_tables_as_parameters() {
        let specs = [RuleSpec {
            tag: "docs",
            patterns: &[r"\btypo\b", r"\breadme\b"],
        }];
        let rules = RuleSet::compile(&specs).unwrap();

        let issues = vec![bug(1, "Random minor typo", ""), bug(2, "Crash", "")];
        let categories = classify_topics(&issues, &rules);

        assert_eq!(categories.get("docs"), &[IssueNumber(1)]);
        assert_eq!(categories.get(OTHER_TAG), &[IssueNumber(2)]);
    }
}

// =============================================================================
// Report
// =============================================================================

mod report {
    use super::*;

    #[test]
    fn sections_in_order() {
        let issues = vec![
            bug(1, "App crashes on Android after Bluetooth pairing", ""),
            bug(2, "Random minor typo", ""),
        ];
        let analysis = classifier().analyze(&issues);
        let report = render_report(&report_title(Some("widgets")), &issues, &analysis);

        let order = [
            "WIDGETS BUG ANALYSIS REPORT",
            "TOTAL BUG ISSUES: 2",
            "BUG CATEGORIES:",
            "PLATFORM BREAKDOWN:",
            "HARDWARE MODEL BREAKDOWN:",
            "TESTING STRATEGY ANALYSIS:",
            "TOP OPEN BUGS BY CATEGORY:",
            "KEY INSIGHTS FOR TESTING STRATEGY",
        ];
        let positions: Vec<_> = order
            .iter()
            .map(|heading| report.find(heading).unwrap_or_else(|| panic!("missing {}", heading)))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn empty_bug_set_renders_without_percentages() {
        let analysis = classifier().analyze(&[]);
        let report = render_report(&report_title(None), &[], &analysis);

        assert!(report.contains("TOTAL BUG ISSUES: 0"));
        assert!(!report.contains('%'));
    }

    #[test]
    fn hardware_labels_are_title_cased() {
        let issues = vec![bug(1, "G1 glasses and Mach 1 both fail", "")];
        let analysis = classifier().analyze(&issues);
        let report = render_report(&report_title(None), &issues, &analysis);

        assert!(report.contains("  Even Realities G1: 1 (100.0%)"));
        assert!(report.contains("  Mentra Mach1: 1 (100.0%)"));
    }
}
