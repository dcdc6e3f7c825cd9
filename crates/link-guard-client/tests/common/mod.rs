//! Shared fixtures for controller integration tests.

use std::sync::Mutex;

use link_guard_client::{ApiEndpoint, BusyIndicator, ClientError, HttpReply, PredictTransport};
use link_guard_core::PredictRequest;
use url::Url;

/// Backend body for a legitimate verdict.
#[allow(dead_code)]
pub const LEGITIMATE_BODY: &str = r#"{
    "is_phishing": false,
    "confidence": 96.1,
    "legitimate_probability": 96.1,
    "phishing_probability": 3.9,
    "features": {"url_length": 19, "has_https": 1}
}"#;

/// Local endpoint used by every test.
#[allow(dead_code)]
pub fn local_endpoint() -> ApiEndpoint {
    ApiEndpoint::new("http://localhost:5000").expect("local endpoint should be valid")
}

/// Transport that records requests and answers from a fixed script.
#[allow(dead_code)]
pub struct ScriptedTransport {
    reply: Box<dyn Fn() -> Result<HttpReply, ClientError> + Send + Sync>,
    requests: Mutex<Vec<(String, PredictRequest)>>,
}

#[allow(dead_code)]
impl ScriptedTransport {
    /// Always answers with the given status and body.
    pub fn replying(status: u16, body: &str) -> Self {
        let body = body.as_bytes().to_vec();
        Self::with(move || {
            Ok(HttpReply {
                status,
                body: body.clone(),
            })
        })
    }

    /// Always fails before any reply.
    pub fn unreachable(message: &str) -> Self {
        let message = message.to_string();
        Self::with(move || Err(ClientError::Transport(message.clone())))
    }

    /// Answers through an arbitrary closure.
    pub fn with(reply: impl Fn() -> Result<HttpReply, ClientError> + Send + Sync + 'static) -> Self {
        Self {
            reply: Box::new(reply),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests seen so far, with the endpoint they were sent to.
    pub fn requests(&self) -> Vec<(String, PredictRequest)> {
        self.requests.lock().expect("request log lock").clone()
    }
}

impl PredictTransport for ScriptedTransport {
    fn predict(&self, endpoint: &Url, request: &PredictRequest) -> Result<HttpReply, ClientError> {
        self.requests
            .lock()
            .expect("request log lock")
            .push((endpoint.to_string(), request.clone()));
        (self.reply)()
    }

    fn health(&self, _endpoint: &Url) -> Result<HttpReply, ClientError> {
        (self.reply)()
    }
}

/// Busy indicator that records every transition.
#[derive(Default)]
pub struct RecordingIndicator {
    events: Mutex<Vec<bool>>,
}

#[allow(dead_code)]
impl RecordingIndicator {
    /// Transitions seen so far.
    pub fn events(&self) -> Vec<bool> {
        self.events.lock().expect("indicator lock").clone()
    }

    /// Last reported busy state; `false` when never raised.
    pub fn is_busy(&self) -> bool {
        self.events().last().copied().unwrap_or(false)
    }
}

impl BusyIndicator for RecordingIndicator {
    fn set_busy(&self, busy: bool) {
        self.events.lock().expect("indicator lock").push(busy);
    }
}
