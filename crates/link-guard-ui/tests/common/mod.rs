//! Shared fixtures for presentation tests.

use link_guard_core::{VerdictPayload, decode_verdict};
use link_guard_interpret::{PresentationModel, interpret};

/// Verdict with every optional section filled in.
#[allow(dead_code)]
pub fn full_model() -> PresentationModel {
    model_from(
        r#"{
            "is_phishing": true,
            "confidence": 88.42,
            "legitimate_probability": 11.58,
            "phishing_probability": 88.42,
            "risk_level": "High",
            "prediction": "Phishing",
            "risk_score": 72,
            "url": "http://paypa1-login.example",
            "explanations": ["Domain resembles a known brand", "Form posts to another host"],
            "features": {"url_length": 27, "has_https": 0, "num_dots": 1},
            "advanced_analysis": {
                "ssl": {"has_valid_ssl": 0, "ssl_issuer_trusted": 0, "ssl_self_signed": 0, "ssl_days_to_expiry": -1},
                "whois": {"domain_age_days": 5, "is_newly_registered": 1, "registrar_reputation": 0},
                "content": {"has_login_form": 1, "form_posts_external": 1, "has_suspicious_js": 0},
                "reputation": {"typosquatting_score": 2, "min_edit_distance": 1, "blacklist_score": 0}
            }
        }"#,
    )
}

/// Verdict carrying only the required fields.
#[allow(dead_code)]
pub fn minimal_model() -> PresentationModel {
    model_from(
        r#"{
            "is_phishing": false,
            "confidence": 97.3,
            "legitimate_probability": 97.3,
            "phishing_probability": 2.7,
            "features": {"has_https": 1}
        }"#,
    )
}

fn model_from(raw: &str) -> PresentationModel {
    let payload: VerdictPayload =
        decode_verdict(raw.as_bytes()).expect("fixture payload should decode");
    interpret(&payload)
}
