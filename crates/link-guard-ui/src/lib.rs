#![warn(missing_docs)]
//! # link-guard-ui
//!
//! ## Purpose
//! Defines the presentation surface that renders a
//! [`PresentationModel`] and the runtime state a shell keeps around it.
//!
//! ## Responsibilities
//! - Declare the render sinks a shell must provide ([`PresentationSink`]).
//! - Drive any sink from a model without holding state of its own.
//! - Keep a reducer-style [`UiState`] for interactive shells.
//! - Render results as terminal text for the command-line shell.
//!
//! ## Data flow
//! Interpreted model -> [`apply_presentation`] -> sink calls -> [`UiState`]
//! fields or [`TextRenderer`] output.
//!
//! ## Ownership and lifetimes
//! Sinks borrow model parts for the duration of each call. `UiState` clones
//! what it keeps so it never borrows from a model.
//!
//! ## Error model
//! Rendering is infallible. Invalid combinations are prevented by the order in
//! which [`apply_presentation`] calls the sinks.

mod text;

use std::sync::atomic::{AtomicBool, Ordering};

use link_guard_client::BusyIndicator;
use link_guard_core::EvidenceSection;
use link_guard_interpret::{
    AdvancedPanels, EvidencePanel, FeatureRow, PresentationModel, ProbabilityBars, RiskBadge,
    VerdictCard,
};

pub use text::TextRenderer;

/// Render sinks a shell provides.
///
/// Nullable sinks receive `None` to hide their section.
pub trait PresentationSink {
    /// Shows or hides the busy indicator.
    fn set_busy(&mut self, busy: bool);
    /// Shows the error banner with a message.
    fn show_error(&mut self, message: &str);
    /// Hides the error banner.
    fn clear_error(&mut self);
    /// Hides the result area and discards its content.
    fn hide_result(&mut self);
    /// Makes the result area visible.
    fn reveal_result(&mut self);
    /// Renders the verdict card.
    fn show_verdict(&mut self, verdict: &VerdictCard);
    /// Renders or hides the risk level badge.
    fn show_risk_badge(&mut self, badge: Option<&RiskBadge>);
    /// Renders confidence and class probabilities.
    fn show_probabilities(&mut self, probabilities: &ProbabilityBars);
    /// Renders the optional detail lines; `None` hides a line.
    fn show_details(&mut self, details: Details<'_>);
    /// Renders the feature list.
    fn show_features(&mut self, rows: &[FeatureRow]);
    /// Renders or hides the explanations list.
    fn show_explanations(&mut self, explanations: Option<&[String]>);
    /// Renders or hides one advanced-analysis panel.
    fn show_panel(&mut self, section: EvidenceSection, panel: Option<&EvidencePanel>);
}

/// Renders one model into a sink, replacing whatever it showed before.
pub fn apply_presentation(model: &PresentationModel, sink: &mut dyn PresentationSink) {
    sink.hide_result();
    sink.show_verdict(&model.verdict);
    sink.show_risk_badge(model.risk_badge.as_ref());
    sink.show_probabilities(&model.probabilities);
    sink.show_details(Details {
        risk_score: model.risk_score.as_deref(),
        analyzed_url: model.analyzed_url.as_deref(),
        prediction: model.prediction.as_deref(),
    });
    sink.show_features(&model.features);
    sink.show_explanations(model.explanations.as_deref());
    for section in EvidenceSection::ALL {
        sink.show_panel(section, model.advanced.get(section));
    }
    sink.reveal_result();
}

/// Optional detail lines under the probabilities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Details<'a> {
    /// Risk score text, e.g. `65/100`.
    pub risk_score: Option<&'a str>,
    /// URL as analysed by the backend.
    pub analyzed_url: Option<&'a str>,
    /// Backend prediction label.
    pub prediction: Option<&'a str>,
}

/// Thread-safe busy flag handed to the controller during a submission.
#[derive(Debug, Default)]
pub struct BusyFlag(AtomicBool);

impl BusyFlag {
    /// Returns the current flag value.
    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl BusyIndicator for BusyFlag {
    fn set_busy(&self, busy: bool) {
        self.0.store(busy, Ordering::SeqCst);
    }
}

/// Content of the result area.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultView {
    /// Whether the result area is shown.
    pub visible: bool,
    /// Verdict card.
    pub verdict: Option<VerdictCard>,
    /// Risk badge, `None` when hidden.
    pub risk_badge: Option<RiskBadge>,
    /// Probability bars.
    pub probabilities: Option<ProbabilityBars>,
    /// Risk score line.
    pub risk_score: Option<String>,
    /// Analysed URL line.
    pub analyzed_url: Option<String>,
    /// Prediction label line.
    pub prediction: Option<String>,
    /// Feature list.
    pub features: Vec<FeatureRow>,
    /// Explanations list, `None` when hidden.
    pub explanations: Option<Vec<String>>,
    /// Advanced panels.
    pub panels: AdvancedPanels,
}

impl ResultView {
    /// Returns `true` when the advanced-analysis area has anything to show.
    pub fn advanced_visible(&self) -> bool {
        !self.panels.is_empty()
    }
}

/// Aggregate UI runtime state.
#[derive(Debug)]
pub struct UiState {
    /// App version string sourced from root `VERSION`.
    pub version: String,
    /// Busy indicator shared with the controller.
    pub busy: BusyFlag,
    /// Error banner text, `None` when hidden.
    pub error_banner: Option<String>,
    /// Result area.
    pub result: ResultView,
}

impl UiState {
    /// Creates idle UI state with nothing shown.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            busy: BusyFlag::default(),
            error_banner: None,
            result: ResultView::default(),
        }
    }

    /// Indicator to pass to the controller for the next submission.
    pub fn indicator(&self) -> &BusyFlag {
        &self.busy
    }

    /// Returns `true` when the submit trigger should be enabled.
    pub fn submit_enabled(&self) -> bool {
        !self.busy.is_busy()
    }
}

impl PresentationSink for UiState {
    fn set_busy(&mut self, busy: bool) {
        self.busy.set_busy(busy);
    }

    fn show_error(&mut self, message: &str) {
        self.error_banner = Some(message.to_string());
    }

    fn clear_error(&mut self) {
        self.error_banner = None;
    }

    fn hide_result(&mut self) {
        self.result = ResultView::default();
    }

    fn reveal_result(&mut self) {
        self.result.visible = true;
    }

    fn show_verdict(&mut self, verdict: &VerdictCard) {
        self.result.verdict = Some(verdict.clone());
    }

    fn show_risk_badge(&mut self, badge: Option<&RiskBadge>) {
        self.result.risk_badge = badge.cloned();
    }

    fn show_probabilities(&mut self, probabilities: &ProbabilityBars) {
        self.result.probabilities = Some(probabilities.clone());
    }

    fn show_details(&mut self, details: Details<'_>) {
        self.result.risk_score = details.risk_score.map(str::to_string);
        self.result.analyzed_url = details.analyzed_url.map(str::to_string);
        self.result.prediction = details.prediction.map(str::to_string);
    }

    fn show_features(&mut self, rows: &[FeatureRow]) {
        self.result.features = rows.to_vec();
    }

    fn show_explanations(&mut self, explanations: Option<&[String]>) {
        self.result.explanations = explanations.map(<[String]>::to_vec);
    }

    fn show_panel(&mut self, section: EvidenceSection, panel: Option<&EvidencePanel>) {
        let slot = match section {
            EvidenceSection::Ssl => &mut self.result.panels.ssl,
            EvidenceSection::Whois => &mut self.result.panels.whois,
            EvidenceSection::Content => &mut self.result.panels.content,
            EvidenceSection::Reputation => &mut self.result.panels.reputation,
        };
        *slot = panel.cloned();
    }
}
