//! HTTP transport types and the transport seam.
//!
//! # Design
//! These types describe HTTP traffic as plain data. The core crate builds
//! `HttpRequest` values and classifies `HttpResponse` values; actually moving
//! bytes over the network is delegated to an `HttpTransport` implementation
//! injected by the host. This keeps the core deterministic: unit tests hand
//! the client canned responses, while the production binary plugs in a real
//! blocking transport.
//!
//! Query parameters stay structured on the request rather than being baked
//! into the URL string, so transports own the encoding and test doubles can
//! inspect them without re-parsing.

use std::fmt;

/// An HTTP GET request described as plain data.
///
/// Built by `ApiClient::build_get`. The transport is responsible for
/// attaching the query parameters and executing the round-trip.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub params: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the transport after executing an `HttpRequest`, then
/// handed to `ApiClient::parse_get` for classification.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// A failure below the HTTP layer (connection refused, DNS resolution,
/// timeout). No status code exists for these; the request never completed.
#[derive(Debug)]
pub struct TransportError(pub String);

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for TransportError {}

/// Executes a single HTTP round-trip.
///
/// Implementations must report every transport-level fault as
/// `TransportError` and every completed exchange as `Ok(HttpResponse)`,
/// whatever its status code. Status interpretation belongs to the client,
/// not the transport.
pub trait HttpTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}
