//! Shared fixtures for interpretation tests.

use link_guard_core::{VerdictPayload, decode_verdict};

/// Builds a payload with only the required fields.
#[allow(dead_code)]
pub fn minimal_payload(is_phishing: bool) -> VerdictPayload {
    let raw = format!(
        r#"{{
            "is_phishing": {is_phishing},
            "confidence": 91.24,
            "legitimate_probability": 8.76,
            "phishing_probability": 91.24,
            "features": {{}}
        }}"#
    );
    decode_verdict(raw.as_bytes()).expect("minimal fixture should decode")
}

/// Builds a payload carrying every optional section.
#[allow(dead_code)]
pub fn full_payload() -> VerdictPayload {
    let raw = br#"{
        "url": "https://secure-paypa1.example/login",
        "prediction": "Phishing",
        "is_phishing": true,
        "confidence": 85.0,
        "phishing_probability": 72.44,
        "legitimate_probability": 27.56,
        "risk_score": 70,
        "risk_level": "Very High",
        "features": {"url_length": 36, "has_https": 1, "has_ip": 0, "domain_age": -1, "num_dots": 3},
        "explanations": [
            "Domain registered within last 30 days (high risk)",
            "Login form posts to external domain (critical risk)"
        ],
        "advanced_analysis": {
            "whois": {"domain_age_days": 400, "is_newly_registered": 0, "registrar_reputation": 1},
            "ssl": {"has_valid_ssl": 1, "ssl_issuer_trusted": 0, "ssl_self_signed": 1, "ssl_days_to_expiry": -1},
            "content": {"has_login_form": 1, "form_posts_external": 1, "has_suspicious_js": 0},
            "reputation": {"typosquatting_score": 2, "min_edit_distance": 1, "blacklist_score": 3}
        }
    }"#;
    decode_verdict(raw).expect("full fixture should decode")
}
