//! Shared fixtures for app integration tests.

use std::sync::{Arc, Mutex};

use link_guard_app::AppConfig;
use link_guard_client::{ClientError, HttpReply, PredictTransport, PredictionController};
use link_guard_core::PredictRequest;
use url::Url;

/// Phishing verdict with advanced analysis.
#[allow(dead_code)]
pub const PHISHING_BODY: &str = r#"{
    "is_phishing": true,
    "confidence": 93.7,
    "legitimate_probability": 6.3,
    "phishing_probability": 93.7,
    "risk_level": "Critical",
    "features": {"has_https": 0, "domain_age": -1, "num_dots": 3},
    "advanced_analysis": {
        "whois": {"domain_age_days": 400, "is_newly_registered": 0, "registrar_reputation": 1},
        "reputation": {"typosquatting_score": 1, "min_edit_distance": 2, "blacklist_score": 0}
    }
}"#;

/// Transport answering every call with one canned reply.
pub struct CannedTransport {
    reply: Result<HttpReply, String>,
    calls: Mutex<Vec<PredictRequest>>,
}

#[allow(dead_code)]
impl CannedTransport {
    /// Replies with a status and body.
    pub fn ok(status: u16, body: &str) -> Self {
        Self {
            reply: Ok(HttpReply {
                status,
                body: body.as_bytes().to_vec(),
            }),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fails every call at transport level.
    pub fn down(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Prediction requests received so far.
    pub fn calls(&self) -> Vec<PredictRequest> {
        self.calls.lock().expect("call log lock").clone()
    }

    fn answer(&self) -> Result<HttpReply, ClientError> {
        self.reply.clone().map_err(ClientError::Transport)
    }
}

impl PredictTransport for CannedTransport {
    fn predict(&self, _endpoint: &Url, request: &PredictRequest) -> Result<HttpReply, ClientError> {
        self.calls
            .lock()
            .expect("call log lock")
            .push(request.clone());
        self.answer()
    }

    fn health(&self, _endpoint: &Url) -> Result<HttpReply, ClientError> {
        self.answer()
    }
}

/// Controller over the default config and the given transport.
#[allow(dead_code)]
pub fn controller_over(transport: &Arc<CannedTransport>) -> PredictionController {
    AppConfig::default()
        .controller(transport.clone())
        .expect("default config should build a controller")
}
