//! Terminal rendering for the command-line shell.

use std::fmt::Write as _;

use link_guard_core::EvidenceSection;
use link_guard_interpret::{EvidencePanel, FeatureRow, ProbabilityBars, RiskBadge, VerdictCard};

use crate::{Details, PresentationSink};

/// Sink that renders everything it is shown as plain text.
///
/// The busy indicator has no textual form; shells report progress on their
/// own channel.
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    error: Option<String>,
    body: String,
    visible: bool,
}

impl TextRenderer {
    /// Creates an empty renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the visible text: the error banner and, once revealed, the
    /// result.
    pub fn text(&self) -> String {
        let mut out = String::new();
        if let Some(error) = &self.error {
            out.push_str(error);
            out.push('\n');
        }
        if self.visible {
            out.push_str(&self.body);
        }
        out
    }

    fn line(&mut self, text: impl AsRef<str>) {
        self.body.push_str(text.as_ref());
        self.body.push('\n');
    }
}

impl PresentationSink for TextRenderer {
    fn set_busy(&mut self, _busy: bool) {}

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    fn clear_error(&mut self) {
        self.error = None;
    }

    fn hide_result(&mut self) {
        self.body.clear();
        self.visible = false;
    }

    fn reveal_result(&mut self) {
        self.visible = true;
    }

    fn show_verdict(&mut self, verdict: &VerdictCard) {
        self.line(format!("{} {}", verdict.marker, verdict.label));
    }

    fn show_risk_badge(&mut self, badge: Option<&RiskBadge>) {
        if let Some(badge) = badge {
            self.line(format!("Risk Level: {}", badge.label));
        }
    }

    fn show_probabilities(&mut self, probabilities: &ProbabilityBars) {
        self.line(format!("Confidence: {}", probabilities.confidence.text));
        self.line(format!(
            "Legitimate: {}  Phishing: {}",
            probabilities.legitimate.text, probabilities.phishing.text
        ));
    }

    fn show_details(&mut self, details: Details<'_>) {
        if let Some(prediction) = details.prediction {
            self.line(format!("Prediction: {prediction}"));
        }
        if let Some(score) = details.risk_score {
            self.line(format!("Risk Score: {score}"));
        }
        if let Some(url) = details.analyzed_url {
            self.line(format!("Analyzed URL: {url}"));
        }
    }

    fn show_features(&mut self, rows: &[FeatureRow]) {
        if rows.is_empty() {
            return;
        }
        self.line("Features:");
        for row in rows {
            self.line(format!("  {}: {}", row.label, row.value));
        }
    }

    fn show_explanations(&mut self, explanations: Option<&[String]>) {
        let Some(items) = explanations else {
            return;
        };
        self.line("Why:");
        for (index, item) in items.iter().enumerate() {
            self.line(format!("  {}. {item}", index + 1));
        }
    }

    fn show_panel(&mut self, _section: EvidenceSection, panel: Option<&EvidencePanel>) {
        let Some(panel) = panel else {
            return;
        };
        let mut block = format!("{}:\n", panel.title);
        for finding in &panel.findings {
            // Writing into a String cannot fail.
            let _ = writeln!(
                block,
                "  [{}] {}: {}",
                finding.severity.class_key(),
                finding.label,
                finding.value
            );
        }
        self.body.push_str(&block);
    }
}
