//! Tests that missing optional sections hide only themselves.

mod common;

use link_guard_core::{EvidenceSection, decode_verdict};
use link_guard_interpret::interpret;

#[test]
fn section_suppression_tests_missing_advanced_and_explanations() {
    let model = interpret(&common::minimal_payload(true));

    assert!(model.advanced.is_empty());
    assert!(model.explanations.is_none());
    assert_eq!(model.verdict.label, "Phishing Detected");
    assert_eq!(model.probabilities.confidence.text, "91.2%");
}

#[test]
fn section_suppression_tests_empty_explanations_are_hidden() {
    let mut payload = common::full_payload();
    payload.explanations = Some(Vec::new());

    let model = interpret(&payload);
    assert!(model.explanations.is_none());
    assert!(!model.advanced.is_empty());
}

#[test]
fn section_suppression_tests_explanations_keep_order() {
    let model = interpret(&common::full_payload());
    let explanations = model.explanations.expect("explanations should render");
    assert_eq!(explanations.len(), 2);
    assert!(explanations[0].starts_with("Domain registered"));
    assert!(explanations[1].starts_with("Login form posts"));
}

#[test]
fn section_suppression_tests_prediction_label_only_when_sent() {
    let full = interpret(&common::full_payload());
    assert_eq!(full.prediction.as_deref(), Some("Phishing"));

    let minimal = interpret(&common::minimal_payload(true));
    assert!(minimal.prediction.is_none());
}

#[test]
fn section_suppression_tests_partial_advanced_block() {
    let raw = br#"{
        "is_phishing": false,
        "confidence": 80.0,
        "legitimate_probability": 80.0,
        "phishing_probability": 20.0,
        "features": {"num_dots": 1},
        "advanced_analysis": {
            "content": {"has_login_form": 0, "form_posts_external": 0, "has_suspicious_js": 0}
        }
    }"#;
    let payload = decode_verdict(raw).expect("partial payload should decode");

    let model = interpret(&payload);
    assert!(model.advanced.get(EvidenceSection::Content).is_some());
    assert!(model.advanced.get(EvidenceSection::Ssl).is_none());
    assert!(model.advanced.get(EvidenceSection::Whois).is_none());
    assert!(model.advanced.get(EvidenceSection::Reputation).is_none());
    assert_eq!(model.features.len(), 1);
}
