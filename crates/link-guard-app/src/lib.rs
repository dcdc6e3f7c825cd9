#![warn(missing_docs)]
//! # link-guard-app
//!
//! ## Purpose
//! Wires configuration, the submit controller, the interpreter, and a
//! presentation sink into one URL check.
//!
//! ## Responsibilities
//! - Read startup configuration from the environment.
//! - Build a controller against the configured backend.
//! - Turn one submit into a [`CheckOutcome`] and render it on any sink.
//!
//! ## Data flow
//! Environment -> [`AppConfig`] -> [`PredictionController`]; input text ->
//! [`check_url`] -> [`CheckOutcome`] -> [`present_outcome`] -> sink.
//!
//! ## Ownership and lifetimes
//! The shell owns the controller and its UI state. Outcomes own their models so
//! they can outlive the controller borrow.
//!
//! ## Error model
//! Per-check failures are values ([`CheckOutcome::Failed`]). Only startup and
//! health probing return [`AppError`].

use std::sync::Arc;

use link_guard_client::{
    ApiEndpoint, BusyIndicator, ClientError, PredictTransport, PredictionController,
    SubmitOutcome, UreqTransport,
};
use link_guard_core::{BackendHealth, DEFAULT_API_BASE, EvidenceSection};
use link_guard_interpret::{PresentationModel, interpret};
use link_guard_ui::{PresentationSink, apply_presentation};
use thiserror::Error;
use tracing::{debug, info};

/// Build-time application version loaded from root `VERSION` file.
pub const APP_VERSION: &str = env!("LINK_GUARD_VERSION");

/// Environment variable overriding the backend base address.
pub const API_BASE_ENV: &str = "LINK_GUARD_API_BASE";

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "link_guard=info";

/// Validation message shown for blank input.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a URL";

/// Returns the app version sourced from root `VERSION`.
pub fn app_version() -> &'static str {
    APP_VERSION
}

/// Startup configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend base address.
    pub api_base: String,
    /// `tracing` filter directives.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// Semantics:
    /// - `LINK_GUARD_API_BASE` unset or blank => [`DEFAULT_API_BASE`].
    /// - `RUST_LOG` unset or blank => [`DEFAULT_LOG_FILTER`].
    pub fn from_env() -> Self {
        Self {
            api_base: non_blank_env(API_BASE_ENV)
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            log_filter: non_blank_env("RUST_LOG")
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Validates the configured backend address.
    ///
    /// # Errors
    /// Returns [`AppError::Config`] when the address violates endpoint policy.
    pub fn endpoint(&self) -> Result<ApiEndpoint, AppError> {
        ApiEndpoint::new(&self.api_base).map_err(AppError::Config)
    }

    /// Builds a controller over the given transport.
    ///
    /// # Errors
    /// Returns [`AppError::Config`] when the address violates endpoint policy.
    pub fn controller(
        &self,
        transport: Arc<dyn PredictTransport>,
    ) -> Result<PredictionController, AppError> {
        let endpoint = self.endpoint()?;
        info!(api_base = endpoint.base_text(), "controller configured");
        Ok(PredictionController::new(endpoint, transport))
    }

    /// Builds a controller over the production HTTP transport.
    ///
    /// # Errors
    /// Returns [`AppError::Config`] when the address violates endpoint policy.
    pub fn http_controller(&self) -> Result<PredictionController, AppError> {
        self.controller(Arc::new(UreqTransport::new()))
    }
}

fn non_blank_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Result of one URL check, ready to present.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    /// Input was blank; nothing was sent.
    EmptyInput,
    /// A previous check is still running; nothing was sent.
    Busy,
    /// Interpreted verdict.
    Verdict(Box<PresentationModel>),
    /// User-facing failure message.
    Failed(String),
}

/// Submits one URL and interprets the verdict.
///
/// The indicator is released by the controller before this returns, so any
/// rendering of the outcome happens with the busy state already cleared.
pub fn check_url(
    controller: &PredictionController,
    url_text: &str,
    indicator: &dyn BusyIndicator,
) -> CheckOutcome {
    match controller.submit(url_text, indicator) {
        SubmitOutcome::EmptyInput => CheckOutcome::EmptyInput,
        SubmitOutcome::Busy => CheckOutcome::Busy,
        SubmitOutcome::Succeeded(payload) => {
            let sections: Vec<&str> = payload
                .advanced_analysis
                .as_ref()
                .map(|analysis| {
                    analysis
                        .present_sections()
                        .into_iter()
                        .map(EvidenceSection::key)
                        .collect()
                })
                .unwrap_or_default();
            debug!(
                features = payload.features.len(),
                ?sections,
                "verdict interpreted"
            );
            let model = interpret(&payload);
            CheckOutcome::Verdict(Box::new(model))
        }
        SubmitOutcome::Failed(report) => CheckOutcome::Failed(report.message),
    }
}

/// Renders an outcome on a sink.
///
/// `Busy` leaves the sink untouched since the running check still owns it.
/// Every other outcome clears the previous error and result first.
pub fn present_outcome(outcome: &CheckOutcome, sink: &mut dyn PresentationSink) {
    if matches!(outcome, CheckOutcome::Busy) {
        return;
    }

    sink.clear_error();
    sink.hide_result();
    match outcome {
        CheckOutcome::EmptyInput => sink.show_error(EMPTY_INPUT_MESSAGE),
        CheckOutcome::Verdict(model) => apply_presentation(model, sink),
        CheckOutcome::Failed(message) => sink.show_error(message),
        CheckOutcome::Busy => {}
    }
}

/// Probes backend liveness.
///
/// # Errors
/// Returns [`AppError::Health`] when the backend is unreachable or replies
/// with an unexpected body.
pub fn probe_health(controller: &PredictionController) -> Result<BackendHealth, AppError> {
    controller.check_health().map_err(AppError::Health)
}

/// One-line description of a health reply.
pub fn describe_health(health: &BackendHealth) -> String {
    let model = if health.model_loaded {
        "loaded"
    } else {
        "not loaded"
    };
    format!("backend {} (model {model})", health.status)
}

/// App integration error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend address rejected at startup.
    #[error("configuration error: {0}")]
    Config(ClientError),
    /// Health probe failed.
    #[error("health check failed: {0}")]
    Health(ClientError),
    /// Reading input failed.
    #[error("input error: {0}")]
    Input(#[from] std::io::Error),
    /// Writing a JSON result failed.
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}
