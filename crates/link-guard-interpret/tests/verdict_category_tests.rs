//! Tests top-level verdict classification and number formatting.

mod common;

use link_guard_interpret::{VerdictCategory, interpret};

#[test]
fn verdict_category_tests_phishing_maps_to_danger() {
    let model = interpret(&common::minimal_payload(true));
    assert_eq!(model.verdict.category, VerdictCategory::Danger);
    assert_eq!(model.verdict.label, "Phishing Detected");
    assert_eq!(model.verdict.class_key, "danger");
}

#[test]
fn verdict_category_tests_legitimate_maps_to_safe() {
    let model = interpret(&common::minimal_payload(false));
    assert_eq!(model.verdict.category, VerdictCategory::Safe);
    assert_eq!(model.verdict.label, "Legitimate Website");
    assert_ne!(
        VerdictCategory::Safe.marker(),
        VerdictCategory::Danger.marker()
    );
}

#[test]
fn verdict_category_tests_probabilities_use_one_decimal_without_clamping() {
    let mut payload = common::minimal_payload(false);
    payload.confidence = 104.36;
    payload.legitimate_probability = 70.0;
    payload.phishing_probability = 70.0;

    let model = interpret(&payload);
    assert_eq!(model.probabilities.confidence.text, "104.4%");
    assert_eq!(model.probabilities.confidence.value, 104.36);
    assert_eq!(model.probabilities.legitimate.text, "70.0%");
    assert_eq!(model.probabilities.phishing.text, "70.0%");
}

#[test]
fn verdict_category_tests_risk_badge_follows_risk_level() {
    let model = interpret(&common::full_payload());
    let badge = model.risk_badge.expect("badge should be present");
    assert_eq!(badge.label, "Very High");
    assert_eq!(badge.class_suffix, "very-high");
    assert_eq!(badge.css_class(), "risk-very-high");
    assert_eq!(model.risk_score.as_deref(), Some("70/100"));

    let model = interpret(&common::minimal_payload(true));
    assert!(model.risk_badge.is_none());
    assert!(model.risk_score.is_none());
}
