//! Blocking HTTP transport backed by `ureq`.

use std::io::Read;

use link_guard_core::PredictRequest;
use url::Url;

use crate::{ClientError, HttpReply, PredictTransport};

/// Production transport. Uses the agent's default timeouts and never retries.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Creates a transport with a fresh connection pool.
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictTransport for UreqTransport {
    fn predict(&self, endpoint: &Url, request: &PredictRequest) -> Result<HttpReply, ClientError> {
        let body = request.to_json_bytes().map_err(ClientError::Encode)?;
        let result = self
            .agent
            .request_url("POST", endpoint)
            .set("Content-Type", "application/json")
            .set("Accept", "application/json")
            .send_bytes(&body);
        into_reply(result)
    }

    fn health(&self, endpoint: &Url) -> Result<HttpReply, ClientError> {
        let result = self
            .agent
            .request_url("GET", endpoint)
            .set("Accept", "application/json")
            .call();
        into_reply(result)
    }
}

fn into_reply(result: Result<ureq::Response, ureq::Error>) -> Result<HttpReply, ClientError> {
    match result {
        Ok(response) => read_reply(response),
        // Non-2xx replies still carry a body the controller may want to show.
        Err(ureq::Error::Status(_, response)) => read_reply(response),
        Err(ureq::Error::Transport(transport)) => Err(ClientError::Transport(transport.to_string())),
    }
}

fn read_reply(response: ureq::Response) -> Result<HttpReply, ClientError> {
    let status = response.status();
    let mut body = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut body)
        .map_err(|error| ClientError::Transport(format!("failed to read response body: {error}")))?;

    Ok(HttpReply { status, body })
}
