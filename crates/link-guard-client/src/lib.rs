#![warn(missing_docs)]
//! # link-guard-client
//!
//! ## Purpose
//! Owns the submit lifecycle for URL checks against the classification
//! backend.
//!
//! ## Responsibilities
//! - Validate the configured backend base address.
//! - Reject blank input before any network activity.
//! - Enforce single-flight submission through an explicit [`SubmissionState`].
//! - Execute requests through an injectable [`PredictTransport`] and map every
//!   transport outcome to a [`SubmitOutcome`].
//! - Raise and always release the caller's busy indicator.
//!
//! ## Data flow
//! UI submit event -> [`PredictionController::submit`] -> [`PredictTransport`]
//! -> raw reply -> [`link_guard_core::decode_verdict`] -> [`SubmitOutcome`].
//!
//! ## Ownership and lifetimes
//! The controller owns its endpoint and a shared transport handle. The state
//! lock is held only for check-and-transition, never across the network call.
//!
//! ## Error model
//! Transport failures, non-2xx statuses, and malformed bodies all surface as
//! [`ClientError`] inside [`SubmitOutcome::Failed`]; none of them is fatal and
//! the controller is immediately ready for the next submission.
//!
//! ## Example
//! ```rust
//! use link_guard_client::{ApiEndpoint, SubmissionState};
//!
//! let endpoint = ApiEndpoint::new("http://localhost:5000").unwrap();
//! assert_eq!(endpoint.predict_url().as_str(), "http://localhost:5000/predict");
//! assert_eq!(SubmissionState::default(), SubmissionState::Idle);
//! ```

mod ureq_transport;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use link_guard_core::{
    BackendHealth, CoreError, HEALTH_PATH, PREDICT_PATH, PredictRequest, VerdictPayload,
    backend_error_message, decode_health, decode_verdict,
};
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

pub use ureq_transport::UreqTransport;

/// Lifecycle of the single active submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// Nothing submitted since startup.
    #[default]
    Idle,
    /// A request is outstanding.
    InFlight,
    /// The last submission produced a verdict.
    Succeeded,
    /// The last submission failed.
    Failed,
}

/// Result of one submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Input was blank after trimming; nothing was sent.
    EmptyInput,
    /// Another submission is still in flight; nothing was sent.
    Busy,
    /// Backend returned a decodable verdict.
    Succeeded(Box<VerdictPayload>),
    /// Request failed at transport, status, or decode level.
    Failed(FailureReport),
}

/// User-facing failure description.
#[derive(Debug)]
pub struct FailureReport {
    /// Underlying error.
    pub error: ClientError,
    /// Message for the error banner, naming the error and the backend.
    pub message: String,
}

impl FailureReport {
    fn new(error: ClientError, endpoint: &ApiEndpoint) -> Self {
        let message = format!(
            "Error: {error}. Make sure the backend service is running and reachable at {}.",
            endpoint.base_text()
        );
        Self { error, message }
    }
}

/// Raw HTTP reply handed back by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    /// HTTP status code.
    pub status: u16,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl HttpReply {
    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Receives busy indicator transitions.
pub trait BusyIndicator {
    /// Shows (`true`) or hides (`false`) the busy state.
    fn set_busy(&self, busy: bool);
}

/// Indicator for callers without a visible busy state.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopIndicator;

impl BusyIndicator for NoopIndicator {
    fn set_busy(&self, _busy: bool) {}
}

/// Abstract transport used by the controller.
///
/// Implementations return `Ok` for any HTTP reply, including non-2xx, and
/// `Err` only when no reply was received.
pub trait PredictTransport: Send + Sync {
    /// Sends `POST` with the JSON-encoded request to the prediction endpoint.
    fn predict(&self, endpoint: &Url, request: &PredictRequest) -> Result<HttpReply, ClientError>;

    /// Sends `GET` to the health endpoint.
    fn health(&self, endpoint: &Url) -> Result<HttpReply, ClientError>;
}

/// Validated backend address and derived endpoint URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint {
    base: String,
    predict: Url,
    health: Url,
}

impl ApiEndpoint {
    /// Validates a base address and derives `/predict` and `/health` under it.
    ///
    /// # Errors
    /// Returns [`ClientError::InvalidEndpoint`] when the address is not an
    /// absolute `http`/`https` URL with a host.
    pub fn new(base: &str) -> Result<Self, ClientError> {
        validate_api_base(base)?;
        let base = base.trim().trim_end_matches('/').to_string();

        Ok(Self {
            predict: join_path(&base, PREDICT_PATH)?,
            health: join_path(&base, HEALTH_PATH)?,
            base,
        })
    }

    /// Base address without trailing slash.
    pub fn base_text(&self) -> &str {
        &self.base
    }

    /// Prediction endpoint URL.
    pub fn predict_url(&self) -> &Url {
        &self.predict
    }

    /// Health endpoint URL.
    pub fn health_url(&self) -> &Url {
        &self.health
    }
}

/// Validates the backend base address.
///
/// # Errors
/// Returns [`ClientError::InvalidEndpoint`] for unparsable URLs, schemes other
/// than `http`/`https`, or URLs without a host.
pub fn validate_api_base(base: &str) -> Result<(), ClientError> {
    let parsed = Url::parse(base.trim())
        .map_err(|error| ClientError::InvalidEndpoint(format!("invalid api url: {error}")))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ClientError::InvalidEndpoint(format!(
            "api url must use http or https, got {}",
            parsed.scheme()
        )));
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(ClientError::InvalidEndpoint(
            "api url must include a host".to_string(),
        ));
    }

    Ok(())
}

fn join_path(base: &str, path: &str) -> Result<Url, ClientError> {
    Url::parse(&format!("{base}{path}"))
        .map_err(|error| ClientError::InvalidEndpoint(format!("invalid endpoint {path}: {error}")))
}

/// Single-flight submit controller.
pub struct PredictionController {
    endpoint: ApiEndpoint,
    transport: Arc<dyn PredictTransport>,
    state: Mutex<SubmissionState>,
}

impl PredictionController {
    /// Creates a controller in the `Idle` state.
    pub fn new(endpoint: ApiEndpoint, transport: Arc<dyn PredictTransport>) -> Self {
        Self {
            endpoint,
            transport,
            state: Mutex::new(SubmissionState::Idle),
        }
    }

    /// Returns the configured endpoint.
    pub fn endpoint(&self) -> &ApiEndpoint {
        &self.endpoint
    }

    /// Returns the current state snapshot.
    pub fn state(&self) -> SubmissionState {
        *self.lock_state()
    }

    /// Returns `true` while a submission is outstanding. Shells use this to
    /// disable the submit trigger.
    pub fn is_busy(&self) -> bool {
        self.state() == SubmissionState::InFlight
    }

    /// Submits one URL.
    ///
    /// Blank input returns [`SubmitOutcome::EmptyInput`] and a concurrent call
    /// returns [`SubmitOutcome::Busy`]; neither touches the network. Otherwise
    /// exactly one request carrying the trimmed text is sent. The busy
    /// indicator is raised after the single-flight check and released before
    /// this method returns, on every path.
    pub fn submit(&self, url_text: &str, indicator: &dyn BusyIndicator) -> SubmitOutcome {
        let url = url_text.trim();
        if url.is_empty() {
            debug!("blank submission ignored");
            return SubmitOutcome::EmptyInput;
        }

        let Some(flight) = self.begin(indicator) else {
            warn!(url, "submission rejected: request already in flight");
            return SubmitOutcome::Busy;
        };

        info!(url, endpoint = %self.endpoint.predict_url(), "dispatching prediction request");
        match self.dispatch(url) {
            Ok(payload) => {
                flight.settle(SubmissionState::Succeeded);
                info!(url, is_phishing = payload.is_phishing, "prediction received");
                SubmitOutcome::Succeeded(Box::new(payload))
            }
            Err(error) => {
                flight.settle(SubmissionState::Failed);
                warn!(url, %error, "prediction request failed");
                SubmitOutcome::Failed(FailureReport::new(error, &self.endpoint))
            }
        }
    }

    /// Queries backend liveness. Does not touch the submission state.
    ///
    /// # Errors
    /// Returns [`ClientError`] for transport failures, non-2xx statuses, or a
    /// malformed body.
    pub fn check_health(&self) -> Result<BackendHealth, ClientError> {
        let reply = self.transport.health(self.endpoint.health_url())?;
        if !reply.is_success() {
            return Err(ClientError::Status {
                status: reply.status,
                detail: backend_error_message(&reply.body),
            });
        }
        decode_health(&reply.body).map_err(ClientError::Decode)
    }

    fn dispatch(&self, url: &str) -> Result<VerdictPayload, ClientError> {
        let request = PredictRequest::new(url);
        let reply = self
            .transport
            .predict(self.endpoint.predict_url(), &request)?;

        if !reply.is_success() {
            return Err(ClientError::Status {
                status: reply.status,
                detail: backend_error_message(&reply.body),
            });
        }

        decode_verdict(&reply.body).map_err(ClientError::Decode)
    }

    fn begin<'a>(&'a self, indicator: &'a dyn BusyIndicator) -> Option<InFlight<'a>> {
        {
            let mut state = self.lock_state();
            if *state == SubmissionState::InFlight {
                return None;
            }
            *state = SubmissionState::InFlight;
        }

        indicator.set_busy(true);
        Some(InFlight {
            state: &self.state,
            indicator,
            settled: None,
        })
    }

    fn lock_state(&self) -> MutexGuard<'_, SubmissionState> {
        // The guarded value is a plain enum, so a poisoned lock is still usable.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Releases the in-flight state and busy indicator when dropped, including
/// during unwinding.
struct InFlight<'a> {
    state: &'a Mutex<SubmissionState>,
    indicator: &'a dyn BusyIndicator,
    settled: Option<SubmissionState>,
}

impl InFlight<'_> {
    fn settle(mut self, outcome: SubmissionState) {
        self.settled = Some(outcome);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let next = self.settled.unwrap_or(SubmissionState::Failed);
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = next;
        self.indicator.set_busy(false);
    }
}

/// Errors produced by the client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Backend base address violates endpoint policy.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
    /// No HTTP reply was received (DNS, refused connection, timeout, I/O).
    #[error("transport failure: {0}")]
    Transport(String),
    /// Backend replied with a non-2xx status.
    #[error(
        "backend returned HTTP {status}: {}",
        .detail.as_deref().unwrap_or("failed to analyze URL")
    )]
    Status {
        /// HTTP status code.
        status: u16,
        /// Backend error message, when the body carried one.
        detail: Option<String>,
    },
    /// Reply body was not a valid payload.
    #[error("malformed response: {0}")]
    Decode(CoreError),
    /// Request body could not be encoded.
    #[error("request encoding failed: {0}")]
    Encode(CoreError),
}
