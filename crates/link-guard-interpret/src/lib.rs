#![warn(missing_docs)]
//! # link-guard-interpret
//!
//! ## Purpose
//! Turns a decoded verdict payload into a fully resolved presentation model.
//!
//! ## Responsibilities
//! - Classify the top-level verdict into exactly two display categories.
//! - Format confidence, probabilities, and feature values for display.
//! - Derive label/severity pairs for every optional evidence section.
//! - Hide sections that the backend did not report instead of failing.
//!
//! ## Data flow
//! [`link_guard_core::VerdictPayload`] -> [`interpret`] ->
//! [`PresentationModel`] -> rendering adapter in `link-guard-ui`.
//!
//! ## Ownership and lifetimes
//! The model owns all display strings, so it can be handed to a renderer after
//! the payload is dropped.
//!
//! ## Error model
//! Interpretation is total: every decodable payload yields a model. Missing
//! optional data produces `None` sections, never errors.

use link_guard_core::{
    AdvancedAnalysis, ContentEvidence, EvidenceSection, FeatureValue, ReputationEvidence,
    SslEvidence, UNKNOWN_SENTINEL, VerdictPayload, WhoisEvidence, feature_label,
};
use serde::Serialize;

/// Feature keys whose value is a `1`/`0` encoded yes/no answer.
pub const BINARY_FEATURE_KEYS: [&str; 4] =
    ["has_https", "has_ip", "dns_record", "has_suspicious_words"];

/// Top-level verdict category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VerdictCategory {
    /// Backend flagged the URL as phishing.
    Danger,
    /// Backend considers the URL legitimate.
    Safe,
}

impl VerdictCategory {
    /// Maps the backend verdict flag.
    pub fn from_flag(is_phishing: bool) -> Self {
        if is_phishing {
            VerdictCategory::Danger
        } else {
            VerdictCategory::Safe
        }
    }

    /// Card headline.
    pub fn label(self) -> &'static str {
        match self {
            VerdictCategory::Danger => "Phishing Detected",
            VerdictCategory::Safe => "Legitimate Website",
        }
    }

    /// Style class for the verdict card.
    pub fn class_key(self) -> &'static str {
        match self {
            VerdictCategory::Danger => "danger",
            VerdictCategory::Safe => "safe",
        }
    }

    /// Severity marker shown next to the headline.
    pub fn marker(self) -> &'static str {
        match self {
            VerdictCategory::Danger => "⚠️",
            VerdictCategory::Safe => "✅",
        }
    }
}

/// Display severity for one finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    /// Evidence in favour of legitimacy.
    Positive,
    /// Informational only.
    Neutral,
    /// Worth attention but not malicious by itself.
    Warning,
    /// Evidence in favour of phishing.
    Negative,
    /// Strongest phishing evidence.
    Critical,
}

impl Severity {
    /// Style class for the finding.
    pub fn class_key(self) -> &'static str {
        match self {
            Severity::Positive => "positive",
            Severity::Neutral => "neutral",
            Severity::Warning => "warning",
            Severity::Negative => "negative",
            Severity::Critical => "critical",
        }
    }

    fn from_good_flag(set: bool) -> Self {
        if set {
            Severity::Positive
        } else {
            Severity::Negative
        }
    }

    fn from_bad_flag(set: bool) -> Self {
        if set {
            Severity::Negative
        } else {
            Severity::Positive
        }
    }
}

/// Three-tier typosquatting classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TyposquattingTier {
    /// Score below 1.
    Low,
    /// Score in `[1, 2)`.
    Medium,
    /// Score of 2 or more.
    High,
}

impl TyposquattingTier {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            TyposquattingTier::Low => "Low Risk",
            TyposquattingTier::Medium => "Medium Risk",
            TyposquattingTier::High => "High Risk",
        }
    }

    /// Display severity.
    pub fn severity(self) -> Severity {
        match self {
            TyposquattingTier::Low => Severity::Positive,
            TyposquattingTier::Medium => Severity::Warning,
            TyposquattingTier::High => Severity::Negative,
        }
    }
}

/// Verdict card content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerdictCard {
    /// Binary category.
    pub category: VerdictCategory,
    /// Headline text.
    pub label: String,
    /// Style class.
    pub class_key: String,
    /// Severity marker glyph.
    pub marker: String,
}

/// Risk level badge; only built when the backend sent `risk_level`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskBadge {
    /// Risk level text exactly as received.
    pub label: String,
    /// Normalized class suffix, e.g. `high-risk`.
    pub class_suffix: String,
}

impl RiskBadge {
    /// Full style class, e.g. `risk-high-risk`.
    pub fn css_class(&self) -> String {
        format!("risk-{}", self.class_suffix)
    }
}

/// One formatted percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Percentage {
    /// Value as received.
    pub value: f64,
    /// Value with one decimal and a `%` suffix.
    pub text: String,
}

impl Percentage {
    fn new(value: f64) -> Self {
        Self {
            value,
            text: format_percent(value),
        }
    }
}

/// Confidence and class probabilities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbabilityBars {
    /// Model confidence; its raw value is also the confidence bar width.
    pub confidence: Percentage,
    /// Legitimate-class probability.
    pub legitimate: Percentage,
    /// Phishing-class probability.
    pub phishing: Percentage,
}

/// One line of the feature list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureRow {
    /// Raw feature key.
    pub key: String,
    /// Display label.
    pub label: String,
    /// Display value.
    pub value: String,
}

/// One labelled finding inside an evidence panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Finding name.
    pub label: String,
    /// Display value.
    pub value: String,
    /// Display severity.
    pub severity: Severity,
}

impl Finding {
    fn new(label: &str, value: impl Into<String>, severity: Severity) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
            severity,
        }
    }
}

/// One advanced-analysis panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvidencePanel {
    /// Which section this panel renders.
    pub section: EvidenceSection,
    /// Panel title.
    pub title: String,
    /// Findings in display order.
    pub findings: Vec<Finding>,
}

impl EvidencePanel {
    /// Looks up a finding by label.
    pub fn finding(&self, label: &str) -> Option<&Finding> {
        self.findings.iter().find(|finding| finding.label == label)
    }
}

/// The four advanced-analysis panels; each is absent when its section was not
/// reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AdvancedPanels {
    /// SSL panel.
    pub ssl: Option<EvidencePanel>,
    /// WHOIS panel.
    pub whois: Option<EvidencePanel>,
    /// Content panel.
    pub content: Option<EvidencePanel>,
    /// Reputation panel.
    pub reputation: Option<EvidencePanel>,
}

impl AdvancedPanels {
    /// Returns the panel for one section.
    pub fn get(&self, section: EvidenceSection) -> Option<&EvidencePanel> {
        match section {
            EvidenceSection::Ssl => self.ssl.as_ref(),
            EvidenceSection::Whois => self.whois.as_ref(),
            EvidenceSection::Content => self.content.as_ref(),
            EvidenceSection::Reputation => self.reputation.as_ref(),
        }
    }

    /// Returns `true` when no panel is present.
    pub fn is_empty(&self) -> bool {
        EvidenceSection::ALL
            .iter()
            .all(|section| self.get(*section).is_none())
    }
}

/// Fully resolved, render-ready result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresentationModel {
    /// Verdict card.
    pub verdict: VerdictCard,
    /// Risk level badge, hidden when absent.
    pub risk_badge: Option<RiskBadge>,
    /// Confidence and probabilities.
    pub probabilities: ProbabilityBars,
    /// Aggregate risk score text, e.g. `65/100`.
    pub risk_score: Option<String>,
    /// URL as analysed by the backend.
    pub analyzed_url: Option<String>,
    /// Backend prediction label, e.g. `Phishing`.
    pub prediction: Option<String>,
    /// Feature list in backend order.
    pub features: Vec<FeatureRow>,
    /// Explanations list, hidden when absent or empty.
    pub explanations: Option<Vec<String>>,
    /// Advanced-analysis panels.
    pub advanced: AdvancedPanels,
}

/// Interprets one verdict payload.
pub fn interpret(payload: &VerdictPayload) -> PresentationModel {
    let category = VerdictCategory::from_flag(payload.is_phishing);

    PresentationModel {
        verdict: VerdictCard {
            category,
            label: category.label().to_string(),
            class_key: category.class_key().to_string(),
            marker: category.marker().to_string(),
        },
        risk_badge: payload.risk_level.as_deref().map(|level| RiskBadge {
            label: level.to_string(),
            class_suffix: risk_class_suffix(level),
        }),
        probabilities: ProbabilityBars {
            confidence: Percentage::new(payload.confidence),
            legitimate: Percentage::new(payload.legitimate_probability),
            phishing: Percentage::new(payload.phishing_probability),
        },
        risk_score: payload
            .risk_score
            .map(|score| format!("{}/100", format_number(score))),
        analyzed_url: payload.url.clone(),
        prediction: payload.prediction.clone(),
        features: payload
            .features
            .iter()
            .map(|(key, value)| FeatureRow {
                key: key.to_string(),
                label: feature_label(key).to_string(),
                value: format_feature_value(key, value),
            })
            .collect(),
        explanations: payload
            .explanations
            .as_ref()
            .filter(|items| !items.is_empty())
            .cloned(),
        advanced: payload
            .advanced_analysis
            .as_ref()
            .map(interpret_advanced)
            .unwrap_or_default(),
    }
}

/// Interprets every present evidence section independently.
pub fn interpret_advanced(analysis: &AdvancedAnalysis) -> AdvancedPanels {
    AdvancedPanels {
        ssl: analysis.ssl.as_ref().map(ssl_panel),
        whois: analysis.whois.as_ref().map(whois_panel),
        content: analysis.content.as_ref().map(content_panel),
        reputation: analysis.reputation.as_ref().map(reputation_panel),
    }
}

/// Formats one feature value using the per-key display rules.
pub fn format_feature_value(key: &str, value: &FeatureValue) -> String {
    if BINARY_FEATURE_KEYS.contains(&key) {
        let yes = matches!(value, FeatureValue::Number(number) if *number == 1.0);
        return if yes { "Yes" } else { "No" }.to_string();
    }

    if key == "domain_age" && value.as_number() == Some(UNKNOWN_SENTINEL as f64) {
        return "Unknown".to_string();
    }

    match value {
        FeatureValue::Number(number) => format_number(*number),
        FeatureValue::Bool(flag) => flag.to_string(),
        FeatureValue::Text(text) => text.clone(),
        FeatureValue::Null => String::new(),
    }
}

/// Formats a percentage with exactly one decimal place.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Formats a number the way it arrived: whole numbers without a fraction,
/// everything else in shortest round-trip form.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Lower-cases a risk level and replaces spaces with hyphens.
pub fn risk_class_suffix(level: &str) -> String {
    level.to_lowercase().replace(' ', "-")
}

/// Classifies domain age in days.
///
/// `days < 30` is negative and `days > 365` is positive; everything else is
/// neutral. The unknown sentinel (`-1`) is below 30 and therefore negative.
pub fn classify_domain_age(days: i64) -> Severity {
    // TODO: confirm with the backend owners whether an unknown age should be neutral.
    if days < 30 {
        Severity::Negative
    } else if days > 365 {
        Severity::Positive
    } else {
        Severity::Neutral
    }
}

/// Whole years of domain age, `None` for the unknown sentinel or other
/// negative values.
pub fn domain_age_years(days: i64) -> Option<i64> {
    (days >= 0).then(|| days.div_euclid(365))
}

/// Classifies a typosquatting score.
pub fn classify_typosquatting(score: f64) -> TyposquattingTier {
    if score >= 2.0 {
        TyposquattingTier::High
    } else if score >= 1.0 {
        TyposquattingTier::Medium
    } else {
        TyposquattingTier::Low
    }
}

fn yes_no(set: bool) -> &'static str {
    if set { "Yes" } else { "No" }
}

fn ssl_panel(ssl: &SslEvidence) -> EvidencePanel {
    let valid = ssl.has_valid_ssl.is_set();
    let trusted = ssl.ssl_issuer_trusted.is_set();
    let self_signed = ssl.ssl_self_signed.is_set();
    let expiry = if ssl.ssl_days_to_expiry == UNKNOWN_SENTINEL {
        "Unknown".to_string()
    } else {
        format!("{} days", ssl.ssl_days_to_expiry)
    };

    EvidencePanel {
        section: EvidenceSection::Ssl,
        title: "SSL Certificate".to_string(),
        findings: vec![
            Finding::new(
                "Valid Certificate",
                yes_no(valid),
                Severity::from_good_flag(valid),
            ),
            Finding::new(
                "Trusted Issuer",
                yes_no(trusted),
                Severity::from_good_flag(trusted),
            ),
            Finding::new(
                "Self-Signed",
                yes_no(self_signed),
                Severity::from_bad_flag(self_signed),
            ),
            Finding::new("Days to Expiry", expiry, Severity::Neutral),
        ],
    }
}

fn whois_panel(whois: &WhoisEvidence) -> EvidencePanel {
    let days = whois.domain_age_days;
    let age = if days == UNKNOWN_SENTINEL {
        "Unknown".to_string()
    } else {
        match domain_age_years(days) {
            Some(1) => format!("{days} days (1 year)"),
            Some(years) => format!("{days} days ({years} years)"),
            None => format!("{days} days"),
        }
    };
    let newly_registered = whois.is_newly_registered.is_set();
    let reputable = whois.registrar_reputation.is_set();

    EvidencePanel {
        section: EvidenceSection::Whois,
        title: "Domain Registration".to_string(),
        findings: vec![
            Finding::new("Domain Age", age, classify_domain_age(days)),
            Finding::new(
                "Newly Registered",
                yes_no(newly_registered),
                Severity::from_bad_flag(newly_registered),
            ),
            Finding::new(
                "Registrar Reputation",
                if reputable { "Reputable" } else { "Not Verified" },
                Severity::from_good_flag(reputable),
            ),
        ],
    }
}

fn content_panel(content: &ContentEvidence) -> EvidencePanel {
    // A login form alone is not malicious; it only raises a warning.
    let login_form = if content.has_login_form.is_set() {
        Finding::new("Login Form", "Present", Severity::Warning)
    } else {
        Finding::new("Login Form", "None", Severity::Positive)
    };
    let external_form = if content.form_posts_external.is_set() {
        Finding::new("External Form Submission", "Critical", Severity::Critical)
    } else {
        Finding::new("External Form Submission", "No", Severity::Positive)
    };
    let scripts = if content.has_suspicious_js.is_set() {
        Finding::new("Suspicious Scripts", "Detected", Severity::Negative)
    } else {
        Finding::new("Suspicious Scripts", "None", Severity::Positive)
    };

    EvidencePanel {
        section: EvidenceSection::Content,
        title: "Page Content".to_string(),
        findings: vec![login_form, external_form, scripts],
    }
}

fn reputation_panel(reputation: &ReputationEvidence) -> EvidencePanel {
    let tier = classify_typosquatting(reputation.typosquatting_score);
    let blacklist = if reputation.blacklist_score > 0.0 {
        Finding::new(
            "Blacklist",
            format!("Flagged ({})", format_number(reputation.blacklist_score)),
            Severity::Negative,
        )
    } else {
        Finding::new("Blacklist", "Clean", Severity::Positive)
    };

    EvidencePanel {
        section: EvidenceSection::Reputation,
        title: "Reputation".to_string(),
        findings: vec![
            Finding::new("Typosquatting Risk", tier.label(), tier.severity()),
            Finding::new(
                "Brand Edit Distance",
                reputation.min_edit_distance.to_string(),
                Severity::Neutral,
            ),
            blacklist,
        ],
    }
}
