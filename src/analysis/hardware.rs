//! analysis::hardware
//!
//! Hardware-model classification. Works like the topical classifier with
//! [`UNSPECIFIED_TAG`] as the fallback bucket.

use super::matcher::RuleSet;
use super::tables::UNSPECIFIED_TAG;
use super::topical::classification_text;
use super::HardwareAssignment;
use crate::core::record::IssueRecord;

pub fn classify_hardware(issues: &[IssueRecord], models: &RuleSet) -> HardwareAssignment {
    let mut hardware = HardwareAssignment::with_keys(
        models
            .tags()
            .chain(std::iter::once(UNSPECIFIED_TAG))
            .map(str::to_string),
    );

    for issue in issues {
        let text = classification_text(issue);
        let mut matched = false;
        for tag in models.matching_tags(&text) {
            hardware.insert(tag.to_string(), issue.number);
            matched = true;
        }
        if !matched {
            hardware.insert(UNSPECIFIED_TAG.to_string(), issue.number);
        }
    }

    hardware
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tables::HARDWARE_MODELS;
    use crate::core::types::{IssueNumber, IssueState};

    fn issue(number: u64, title: &str) -> IssueRecord {
        IssueRecord {
            number: IssueNumber(number),
            title: title.into(),
            body: None,
            state: IssueState::Open,
            labels: vec![],
            created_at: String::new(),
            html_url: String::new(),
            updated_at: None,
            closed_at: None,
            user: None,
            extra: Default::default(),
        }
    }

    fn classify(title: &str) -> Vec<String> {
        let models = RuleSet::compile(HARDWARE_MODELS).unwrap();
        let hardware = classify_hardware(&[issue(1, title)], &models);
        hardware
            .keys_of(IssueNumber(1))
            .into_iter()
            .cloned()
            .collect()
    }

    #[test]
    fn g1() {
        assert_eq!(classify("G1 glasses won't connect"), vec!["even_realities_g1"]);
        assert_eq!(classify("Even Realities display"), vec!["even_realities_g1"]);
    }

    #[test]
    fn mach1_spacing() {
        assert_eq!(classify("Mach 1 screen dim"), vec!["mentra_mach1"]);
        assert_eq!(classify("mach1 screen dim"), vec!["mentra_mach1"]);
    }

    #[test]
    fn vuzix() {
        assert_eq!(classify("Z 100 flicker"), vec!["vuzix_z100"]);
        assert_eq!(classify("Vuzix flicker"), vec!["vuzix_z100"]);
    }

    #[test]
    fn live_matches_broadly() {
        assert_eq!(classify("Live captions lag"), vec!["mentra_live"]);
    }

    #[test]
    fn several_models() {
        assert_eq!(
            classify("Works on G1 but not Vuzix"),
            vec!["even_realities_g1", "vuzix_z100"]
        );
    }

    #[test]
    fn no_model_is_unspecified() {
        assert_eq!(classify("Login button missing"), vec!["unspecified"]);
    }
}
