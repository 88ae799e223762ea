//! HTTP GET client for the joke API, with outcome classification.
//!
//! # Design
//! `ApiClient` holds a normalized `base_url` and an injected transport; it
//! carries no other state between calls. Each `get` is split into a
//! `build_get` step that produces an `HttpRequest` and a `parse_get` step
//! that classifies the `HttpResponse`, so both halves stay testable without
//! a network. Every call is a single attempt; nothing is retried or cached.
//!
//! Classification contract:
//! - transport fault            → `ApiError::Network`
//! - non-2xx status             → `ApiError::Processing { status: Some(..) }`
//! - 2xx, body not valid JSON   → `ApiError::Processing { status: None }`
//! - 2xx, JSON body             → the parsed `Value`, unchanged

use log::{error, info};
use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, HttpTransport};

/// Blocking client for a single JSON-over-HTTP API.
pub struct ApiClient {
    base_url: String,
    transport: Box<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(base_url: &str, transport: Box<dyn HttpTransport>) -> Self {
        info!("API client initialized with base URL: {base_url}");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// Build the GET request for `endpoint` without executing it.
    pub fn build_get(&self, endpoint: &str, params: &[(&str, &str)]) -> HttpRequest {
        HttpRequest {
            url: format!("{}/{}", self.base_url, endpoint.trim_start_matches('/')),
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Classify a completed exchange for `endpoint`.
    pub fn parse_get(&self, endpoint: &str, response: &HttpResponse) -> Result<Value, ApiError> {
        if !(200..300).contains(&response.status) {
            let err = ApiError::Processing {
                endpoint: endpoint.to_string(),
                status: Some(response.status),
            };
            error!("{err}");
            return Err(err);
        }
        serde_json::from_str(&response.body).map_err(|parse_err| {
            error!("unexpected response body on endpoint '{endpoint}': {parse_err}");
            ApiError::Processing {
                endpoint: endpoint.to_string(),
                status: None,
            }
        })
    }

    /// Execute a GET against `{base_url}/{endpoint}` and classify the outcome.
    pub fn get(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Value, ApiError> {
        let request = self.build_get(endpoint, params);
        let response = match self.transport.execute(&request) {
            Ok(response) => response,
            Err(transport_err) => {
                let err = ApiError::Network {
                    url: request.url,
                    detail: transport_err.to_string(),
                };
                error!("{err}");
                return Err(err);
            }
        };
        self.parse_get(endpoint, &response)
    }
}
