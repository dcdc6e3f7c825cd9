//! Validates contract fixtures against frozen JSON schemas and the codecs.

use link_guard_contract_tests::{compile_validator, load_json, read_contract};
use link_guard_core::{EvidenceSection, PredictRequest, decode_health, decode_verdict};

#[test]
fn predict_request_fixture_matches_schema() {
    let validator = compile_validator("predict-request.schema.json");
    let fixture = load_json("fixtures/predict-request.valid.json");
    assert!(
        validator.is_valid(&fixture),
        "predict request fixture should validate against schema"
    );
}

#[test]
fn encoded_predict_request_matches_schema() {
    let validator = compile_validator("predict-request.schema.json");
    let bytes = PredictRequest::new("http://example.test/a b")
        .to_json_bytes()
        .expect("request should encode");
    let encoded: serde_json::Value = serde_json::from_slice(&bytes).expect("encoded json");
    assert!(
        validator.is_valid(&encoded),
        "encoded request should validate against schema"
    );
}

#[test]
fn verdict_fixtures_match_schema_and_decode() {
    let validator = compile_validator("verdict-response.schema.json");
    for fixture in [
        "fixtures/verdict-response.valid.json",
        "fixtures/verdict-response.minimal.valid.json",
    ] {
        assert!(
            validator.is_valid(&load_json(fixture)),
            "{fixture} should validate against schema"
        );
        decode_verdict(&read_contract(fixture)).expect("valid fixture should decode");
    }
}

#[test]
fn full_verdict_fixture_keeps_feature_order() {
    let payload = decode_verdict(&read_contract("fixtures/verdict-response.valid.json"))
        .expect("full fixture should decode");
    let keys: Vec<&str> = payload.features.keys().collect();
    assert_eq!(payload.features.len(), 8);
    assert_eq!(keys.first(), Some(&"url_length"));
    assert_eq!(keys.last(), Some(&"has_suspicious_words"));
    let analysis = payload
        .advanced_analysis
        .expect("full fixture carries advanced analysis");
    let sections: Vec<&str> = analysis
        .present_sections()
        .into_iter()
        .map(EvidenceSection::key)
        .collect();
    assert_eq!(sections, vec!["ssl", "whois", "content", "reputation"]);
}

#[test]
fn invalid_verdict_fixture_is_rejected_by_schema_and_codec() {
    let validator = compile_validator("verdict-response.schema.json");
    let fixture = "fixtures/verdict-response.missing-probability.invalid.json";
    assert!(!validator.is_valid(&load_json(fixture)));
    assert!(decode_verdict(&read_contract(fixture)).is_err());
}

#[test]
fn health_fixture_matches_schema_and_decodes() {
    let validator = compile_validator("health-response.schema.json");
    let fixture = "fixtures/health-response.valid.json";
    assert!(validator.is_valid(&load_json(fixture)));
    let health = decode_health(&read_contract(fixture)).expect("health fixture should decode");
    assert!(health.model_loaded);
}
