#![warn(missing_docs)]
//! # link-guard-core
//!
//! ## Purpose
//! Defines the wire data model shared across the `link-guard` workspace.
//!
//! ## Responsibilities
//! - Represent the prediction request sent to the classification backend.
//! - Decode verdict payloads, including optional evidence sections.
//! - Preserve feature ordering exactly as the backend emitted it.
//! - Provide the fixed feature label lookup and backend endpoint constants.
//!
//! ## Data flow
//! Client code encodes a [`PredictRequest`], the backend answers with raw JSON,
//! and [`decode_verdict`] turns it into a [`VerdictPayload`] that the
//! interpretation layer consumes.
//!
//! ## Ownership and lifetimes
//! Decoded payloads own their strings and feature entries so they can outlive
//! the transient network buffer they were parsed from.
//!
//! ## Error model
//! Malformed JSON or missing mandatory fields return [`CoreError`]. Absent
//! optional sections are not errors; they decode to `None`.
//!
//! ## Example
//! ```rust
//! use link_guard_core::{decode_verdict, feature_label};
//!
//! let raw = br#"{
//!     "is_phishing": false,
//!     "confidence": 91.0,
//!     "legitimate_probability": 91.0,
//!     "phishing_probability": 9.0,
//!     "features": {"num_dots": 2, "has_https": 1}
//! }"#;
//! let payload = decode_verdict(raw).unwrap();
//! assert_eq!(payload.features.keys().collect::<Vec<_>>(), vec!["num_dots", "has_https"]);
//! assert_eq!(feature_label("has_https"), "HTTPS");
//! assert_eq!(feature_label("whois_privacy"), "whois_privacy");
//! ```

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Base address of the classification backend.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Path of the prediction endpoint, relative to the base address.
pub const PREDICT_PATH: &str = "/predict";

/// Path of the backend liveness endpoint.
pub const HEALTH_PATH: &str = "/health";

/// Sentinel used by the backend for "could not determine".
pub const UNKNOWN_SENTINEL: i64 = -1;

/// Body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictRequest {
    /// URL text exactly as submitted (already trimmed by the caller).
    pub url: String,
}

impl PredictRequest {
    /// Creates a request for one URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Serializes the request to compact JSON bytes.
    ///
    /// # Errors
    /// Returns [`CoreError::Codec`] when JSON serialization fails.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, CoreError> {
        serde_json::to_vec(self).map_err(CoreError::Codec)
    }
}

/// Successful response of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerdictPayload {
    /// Binary verdict from the backend.
    pub is_phishing: bool,
    /// Model confidence in percent.
    pub confidence: f64,
    /// Probability of the legitimate class in percent.
    pub legitimate_probability: f64,
    /// Probability of the phishing class in percent.
    pub phishing_probability: f64,
    /// Raw feature values in backend order.
    pub features: FeatureSet,
    /// Free-text risk level, e.g. `High` or `Very Low`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,
    /// Human-readable reasons, in backend order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanations: Option<Vec<String>>,
    /// Supporting evidence sections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced_analysis: Option<AdvancedAnalysis>,
    /// Normalized URL the backend actually analysed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Backend label (`Phishing` or `Legitimate`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction: Option<String>,
    /// Aggregate heuristic risk score in `[0, 100]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<f64>,
}

/// Optional evidence block. Each section may be missing independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvancedAnalysis {
    /// TLS certificate evidence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl: Option<SslEvidence>,
    /// Domain registration evidence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whois: Option<WhoisEvidence>,
    /// Page content evidence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentEvidence>,
    /// Brand-similarity and blacklist evidence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reputation: Option<ReputationEvidence>,
}

impl AdvancedAnalysis {
    /// Returns the sections present in this block, in display order.
    pub fn present_sections(&self) -> Vec<EvidenceSection> {
        let mut sections = Vec::with_capacity(4);
        if self.ssl.is_some() {
            sections.push(EvidenceSection::Ssl);
        }
        if self.whois.is_some() {
            sections.push(EvidenceSection::Whois);
        }
        if self.content.is_some() {
            sections.push(EvidenceSection::Content);
        }
        if self.reputation.is_some() {
            sections.push(EvidenceSection::Reputation);
        }
        sections
    }
}

/// Identifies one evidence section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceSection {
    /// `advanced_analysis.ssl`
    Ssl,
    /// `advanced_analysis.whois`
    Whois,
    /// `advanced_analysis.content`
    Content,
    /// `advanced_analysis.reputation`
    Reputation,
}

impl EvidenceSection {
    /// All sections in display order.
    pub const ALL: [EvidenceSection; 4] = [
        EvidenceSection::Ssl,
        EvidenceSection::Whois,
        EvidenceSection::Content,
        EvidenceSection::Reputation,
    ];

    /// Wire name of the section.
    pub fn key(self) -> &'static str {
        match self {
            EvidenceSection::Ssl => "ssl",
            EvidenceSection::Whois => "whois",
            EvidenceSection::Content => "content",
            EvidenceSection::Reputation => "reputation",
        }
    }
}

/// TLS certificate evidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SslEvidence {
    /// Certificate validated successfully.
    pub has_valid_ssl: Flag,
    /// Issuer is a known certificate authority.
    pub ssl_issuer_trusted: Flag,
    /// Certificate is self-signed.
    pub ssl_self_signed: Flag,
    /// Days until expiry, or [`UNKNOWN_SENTINEL`].
    pub ssl_days_to_expiry: i64,
}

/// Domain registration evidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WhoisEvidence {
    /// Domain age in days, or [`UNKNOWN_SENTINEL`].
    pub domain_age_days: i64,
    /// Registered within the backend's "new domain" window.
    pub is_newly_registered: Flag,
    /// Registrar is on the backend's reputable list.
    pub registrar_reputation: Flag,
}

/// Page content evidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContentEvidence {
    /// Page contains a login form.
    pub has_login_form: Flag,
    /// A form submits to a different domain.
    pub form_posts_external: Flag,
    /// Page contains obfuscated or suspicious scripts.
    pub has_suspicious_js: Flag,
}

/// Brand-similarity and blacklist evidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReputationEvidence {
    /// Typosquatting score; higher is more similar to a known brand.
    pub typosquatting_score: f64,
    /// Smallest edit distance to a known brand domain.
    pub min_edit_distance: i64,
    /// Blacklist hit score; zero means no hit.
    pub blacklist_score: f64,
}

/// Boolean evidence flag.
///
/// The backend encodes flags as `0`/`1` integers; JSON booleans are accepted
/// too. Any non-zero number counts as set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flag(pub bool);

impl Flag {
    /// Returns `true` when the flag is set.
    pub fn is_set(self) -> bool {
        self.0
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl Serialize for Flag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(self.0))
    }
}

impl<'de> Deserialize<'de> for Flag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FlagVisitor;

        impl Visitor<'_> for FlagVisitor {
            type Value = Flag;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a boolean or a 0/1 integer flag")
            }

            fn visit_bool<E: de::Error>(self, value: bool) -> Result<Flag, E> {
                Ok(Flag(value))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Flag, E> {
                Ok(Flag(value != 0))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Flag, E> {
                Ok(Flag(value != 0))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Flag, E> {
                Ok(Flag(value != 0.0))
            }
        }

        deserializer.deserialize_any(FlagVisitor)
    }
}

/// One raw feature value.
///
/// Features are documented as numbers, but the backend also emits text (for
/// example `ip_address`) and may emit `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    /// Numeric value.
    Number(f64),
    /// JSON boolean.
    Bool(bool),
    /// Free text.
    Text(String),
    /// JSON `null`.
    Null,
}

impl FeatureValue {
    /// Returns the numeric value, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FeatureValue::Number(value) => Some(*value),
            _ => None,
        }
    }
}

/// Feature map that keeps the backend's key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureSet {
    entries: Vec<(String, FeatureValue)>,
}

impl FeatureSet {
    /// Creates an empty feature set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces one entry. Replacement keeps the original position.
    pub fn insert(&mut self, key: impl Into<String>, value: FeatureValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Looks up one feature by key.
    pub fn get(&self, key: &str) -> Option<&FeatureValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Iterates entries in backend order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureValue)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Iterates keys in backend order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no features were reported.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, FeatureValue)> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = (K, FeatureValue)>>(iter: I) -> Self {
        let mut set = FeatureSet::new();
        for (key, value) in iter {
            set.insert(key, value);
        }
        set
    }
}

impl Serialize for FeatureSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FeatureSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FeatureSetVisitor;

        impl<'de> Visitor<'de> for FeatureSetVisitor {
            type Value = FeatureSet;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of feature names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<FeatureSet, A::Error> {
                let mut set = FeatureSet {
                    entries: Vec::with_capacity(access.size_hint().unwrap_or(0)),
                };
                while let Some((key, value)) = access.next_entry::<String, FeatureValue>()? {
                    set.insert(key, value);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(FeatureSetVisitor)
    }
}

/// Response of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendHealth {
    /// Service status string, `healthy` when up.
    pub status: String,
    /// Whether the classification model is loaded.
    #[serde(default)]
    pub model_loaded: bool,
}

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BackendErrorBody {
    /// Backend-provided message.
    pub error: String,
}

/// Serializes a verdict to compact JSON bytes, e.g. for fixtures or replays.
///
/// # Errors
/// Returns [`CoreError::Codec`] when JSON serialization fails.
pub fn encode_verdict(payload: &VerdictPayload) -> Result<Vec<u8>, CoreError> {
    serde_json::to_vec(payload).map_err(CoreError::Codec)
}

/// Decodes a `/predict` response body.
///
/// # Errors
/// Returns [`CoreError::Codec`] for invalid JSON, missing required fields, or
/// an evidence section missing one of its documented fields.
pub fn decode_verdict(raw: &[u8]) -> Result<VerdictPayload, CoreError> {
    serde_json::from_slice(raw).map_err(CoreError::Codec)
}

/// Decodes a `/health` response body.
///
/// # Errors
/// Returns [`CoreError::Codec`] for invalid JSON.
pub fn decode_health(raw: &[u8]) -> Result<BackendHealth, CoreError> {
    serde_json::from_slice(raw).map_err(CoreError::Codec)
}

/// Extracts the backend error message from a non-2xx body, if it has one.
pub fn backend_error_message(raw: &[u8]) -> Option<String> {
    serde_json::from_slice::<BackendErrorBody>(raw)
        .ok()
        .map(|body| body.error)
        .filter(|message| !message.trim().is_empty())
}

const FEATURE_LABELS: [(&str, &str); 18] = [
    ("url_length", "URL Length"),
    ("domain_length", "Domain Length"),
    ("host_length", "Host Length"),
    ("num_dots", "Dots Count"),
    ("num_hyphens", "Hyphens Count"),
    ("num_underscores", "Underscores"),
    ("num_slashes", "Slashes Count"),
    ("num_question", "Question Marks"),
    ("num_equal", "Equal Signs"),
    ("num_at", "At Symbols (@)"),
    ("num_ampersand", "Ampersands"),
    ("num_digits", "Digits Count"),
    ("has_https", "HTTPS"),
    ("has_ip", "Has IP Address"),
    ("domain_age", "Domain Age (days)"),
    ("dns_record", "DNS Record"),
    ("subdomain_level", "Subdomain Level"),
    ("has_suspicious_words", "Suspicious Words"),
];

/// Returns the display label for a feature key, or the key itself when it is
/// not a known feature.
pub fn feature_label(key: &str) -> &str {
    FEATURE_LABELS
        .iter()
        .find(|(known, _)| *known == key)
        .map(|(_, label)| *label)
        .unwrap_or(key)
}

/// Error type for wire model codec failures.
#[derive(Debug, Error)]
pub enum CoreError {
    /// JSON encoding/decoding error.
    #[error("payload codec failure: {0}")]
    Codec(#[from] serde_json::Error),
}
