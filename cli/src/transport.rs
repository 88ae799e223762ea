//! Blocking HTTP transport backed by ureq.

use std::time::Duration;

use jokes_core::{HttpRequest, HttpResponse, HttpTransport, TransportError};

/// Fixed bound on every call; there is no cancellation beyond it.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// `HttpTransport` implementation over a ureq agent.
///
/// The agent runs with `http_status_as_error(false)` so 4xx/5xx responses
/// come back as data; status interpretation belongs to the client. Only
/// faults below the HTTP layer (connect, DNS, timeout) surface as
/// `TransportError`.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(REQUEST_TIMEOUT))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl HttpTransport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut call = self.agent.get(&request.url);
        for (key, value) in &request.params {
            call = call.query(key, value);
        }
        let mut response = call.call().map_err(|e| TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
