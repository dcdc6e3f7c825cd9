//! Deterministic payload builders for smoke benchmarks.

use link_guard_core::{
    AdvancedAnalysis, ContentEvidence, FeatureSet, FeatureValue, Flag, ReputationEvidence,
    SslEvidence, VerdictPayload, WhoisEvidence,
};

/// Builds a fully populated verdict with `feature_count` numeric features.
pub fn sample_payload(feature_count: usize) -> VerdictPayload {
    let features: FeatureSet = (0..feature_count)
        .map(|index| (format!("feature_{index}"), FeatureValue::Number(index as f64)))
        .chain([
            ("has_https".to_string(), FeatureValue::Number(1.0)),
            ("domain_age".to_string(), FeatureValue::Number(-1.0)),
        ])
        .collect();

    VerdictPayload {
        is_phishing: true,
        confidence: 87.6,
        legitimate_probability: 12.4,
        phishing_probability: 87.6,
        features,
        risk_level: Some("Very High".to_string()),
        explanations: Some(vec!["Brand lookalike domain".to_string(); 4]),
        advanced_analysis: Some(AdvancedAnalysis {
            ssl: Some(SslEvidence {
                has_valid_ssl: Flag(true),
                ssl_issuer_trusted: Flag(true),
                ssl_self_signed: Flag(false),
                ssl_days_to_expiry: 42,
            }),
            whois: Some(WhoisEvidence {
                domain_age_days: 12,
                is_newly_registered: Flag(true),
                registrar_reputation: Flag(false),
            }),
            content: Some(ContentEvidence {
                has_login_form: Flag(true),
                form_posts_external: Flag(false),
                has_suspicious_js: Flag(true),
            }),
            reputation: Some(ReputationEvidence {
                typosquatting_score: 1.0,
                min_edit_distance: 2,
                blacklist_score: 0.5,
            }),
        }),
        url: Some("http://bench.example".to_string()),
        prediction: Some("Phishing".to_string()),
        risk_score: Some(71.0),
    }
}
