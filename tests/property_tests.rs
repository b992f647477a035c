//! Property-based tests for the classifiers.
//!
//! Issue text is assembled from a vocabulary that hits many categories,
//! platforms and hardware models, mixed with filler words. The standard
//! classifier is compiled once and shared by every case.

use std::collections::HashSet;
use std::sync::LazyLock;

use proptest::prelude::*;

use bugsift::analysis::tables::{OTHER_TAG, TESTABILITY_MAP};
use bugsift::analysis::{Classifier, TestabilityTag};
use bugsift::core::record::{IssueRecord, Label};
use bugsift::core::types::{IssueNumber, IssueState, RepoSlug};
use bugsift::ui::report::{render_report, report_title};

const VOCABULARY: &[&str] = &[
    "bluetooth", "pairing", "crash", "stream", "rtmp", "permission", "ios", "iphone", "android",
    "page", "button", "cloud", "sync", "firmware", "sensor", "slow", "battery", "wifi", "hotspot",
    "console", "upload", "image", "error", "message", "audio", "mic", "gallery", "photo", "state",
    "app", "ble", "camera", "recording", "g1", "glasses", "live", "mach", "1", "vuzix", "z100",
    "translation", "language", "the", "when", "after", "typo", "readme", "banana", "window",
];

static CLASSIFIER: LazyLock<Classifier> =
    LazyLock::new(|| Classifier::standard().expect("standard tables compile"));

fn word() -> impl Strategy<Value = &'static str> {
    prop::sample::select(VOCABULARY)
}

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 0..8).prop_map(|words| words.join(" "))
}

fn issues() -> impl Strategy<Value = Vec<IssueRecord>> {
    prop::collection::vec((text(), text(), any::<bool>()), 0..12).prop_map(|parts| {
        parts
            .into_iter()
            .enumerate()
            .map(|(idx, (title, body, open))| IssueRecord {
                number: IssueNumber(idx as u64 + 1),
                title,
                body: Some(body),
                state: if open {
                    IssueState::Open
                } else {
                    IssueState::Closed
                },
                labels: vec![Label::new("bug")],
                created_at: String::new(),
                html_url: String::new(),
                updated_at: None,
                closed_at: None,
                user: None,
                extra: Default::default(),
            })
            .collect()
    })
}

fn tag_of(category: &str) -> TestabilityTag {
    TESTABILITY_MAP
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, t)| *t)
        .unwrap_or(TestabilityTag::DEFAULT)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn testability_is_a_partition(issues in issues()) {
        let analysis = CLASSIFIER.analyze(&issues);

        prop_assert_eq!(analysis.testability.total_memberships(), issues.len());
        for issue in &issues {
            prop_assert_eq!(analysis.testability.keys_of(issue.number).len(), 1);
        }
    }

    #[test]
    fn platform_is_a_partition(issues in issues()) {
        let analysis = CLASSIFIER.analyze(&issues);

        prop_assert_eq!(analysis.platforms.total_memberships(), issues.len());
        for issue in &issues {
            prop_assert_eq!(analysis.platforms.keys_of(issue.number).len(), 1);
        }
    }

    #[test]
    fn other_iff_no_topic(issues in issues()) {
        let analysis = CLASSIFIER.analyze(&issues);

        for issue in &issues {
            let keys = analysis.categories.keys_of(issue.number);
            let in_other = keys.iter().any(|k| k.as_str() == OTHER_TAG);
            prop_assert!(!keys.is_empty());
            if in_other {
                prop_assert_eq!(keys.len(), 1);
                prop_assert!(analysis
                    .testability
                    .contains(&TestabilityTag::DEFAULT, issue.number));
            }
        }
    }

    #[test]
    fn strictest_tag_wins(issues in issues()) {
        let analysis = CLASSIFIER.analyze(&issues);

        for issue in &issues {
            let expected = analysis
                .categories
                .keys_of(issue.number)
                .into_iter()
                .filter(|c| c.as_str() != OTHER_TAG)
                .map(|c| tag_of(c))
                .max()
                .unwrap_or(TestabilityTag::DEFAULT);
            prop_assert!(analysis.testability.contains(&expected, issue.number));
        }
    }

    #[test]
    fn issue_order_does_not_change_membership(issues in issues()) {
        let classifier = &*CLASSIFIER;
        let forward = classifier.analyze(&issues);
        let mut reversed_issues = issues.clone();
        reversed_issues.reverse();
        let reversed = classifier.analyze(&reversed_issues);

        for issue in &issues {
            let a: HashSet<_> = forward.categories.keys_of(issue.number).into_iter().collect();
            let b: HashSet<_> = reversed.categories.keys_of(issue.number).into_iter().collect();
            prop_assert_eq!(a, b);
            prop_assert_eq!(
                forward.testability.keys_of(issue.number),
                reversed.testability.keys_of(issue.number)
            );
        }
    }

    #[test]
    fn analysis_is_idempotent(issues in issues()) {
        let classifier = &*CLASSIFIER;
        prop_assert_eq!(classifier.analyze(&issues), classifier.analyze(&issues));
    }

    #[test]
    fn report_never_panics(issues in issues()) {
        let analysis = CLASSIFIER.analyze(&issues);
        let report = render_report(&report_title(None), &issues, &analysis);
        let expected_total = format!("TOTAL BUG ISSUES: {}", issues.len());
        prop_assert!(report.contains(&expected_total));
    }

    #[test]
    fn slug_display_roundtrips(owner in "[A-Za-z0-9][A-Za-z0-9-]{0,15}", repo in "[A-Za-z0-9._-]{1,20}") {
        let input = format!("{}/{}", owner, repo);
        let slug = RepoSlug::parse(&input).unwrap();
        prop_assert_eq!(slug.to_string(), input);
        prop_assert_eq!(slug.dir_name(), format!("{}_{}", owner, repo));
    }
}
