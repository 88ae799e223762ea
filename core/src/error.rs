//! Error types for the joke API client.
//!
//! # Design
//! Two kinds cover every hard failure the client can produce. `Network`
//! means the request never completed (connection refused, DNS failure,
//! timeout), so no status code exists. `Processing` means the server answered but the
//! answer was unusable: a non-2xx status (carried in `status`), or a 2xx
//! body that was not valid JSON (`status: None`). Callers that want to
//! distinguish the two sub-cases match on `status`.
//!
//! Soft per-category failures ("no joke for this category") are not errors
//! and never appear here; the collector represents them as `Option::None`.

use std::fmt;

/// Hard failures raised by `ApiClient::get`. Any of these aborts the
/// collection run.
#[derive(Debug)]
pub enum ApiError {
    /// The transport could not complete the request at all.
    Network { url: String, detail: String },

    /// The server responded, but with an error status or an unparseable
    /// body. `status` is `Some` for non-2xx responses and `None` when a
    /// 2xx body failed to parse as JSON.
    Processing { endpoint: String, status: Option<u16> },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network { url, detail } => {
                write!(f, "network failure reaching '{url}': {detail}")
            }
            ApiError::Processing { endpoint, status: Some(code) } => {
                write!(f, "HTTP error ({code}) on endpoint '{endpoint}'")
            }
            ApiError::Processing { endpoint, status: None } => {
                write!(f, "invalid response body on endpoint '{endpoint}'")
            }
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_endpoint_and_status() {
        let err = ApiError::Processing {
            endpoint: "random".to_string(),
            status: Some(503),
        };
        assert_eq!(err.to_string(), "HTTP error (503) on endpoint 'random'");
    }

    #[test]
    fn display_marks_body_errors_without_status() {
        let err = ApiError::Processing {
            endpoint: "categories".to_string(),
            status: None,
        };
        assert_eq!(
            err.to_string(),
            "invalid response body on endpoint 'categories'"
        );
    }

    #[test]
    fn display_includes_transport_detail() {
        let err = ApiError::Network {
            url: "http://localhost:1/categories".to_string(),
            detail: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("connection refused"));
        assert!(err.to_string().contains("http://localhost:1/categories"));
    }
}
