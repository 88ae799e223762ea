//! Classification and decode behavior driven by JSON vectors in `test-vectors/`.
//!
//! Each vector file describes simulated responses or payloads alongside the
//! expected outcome. Comparing parsed JSON (not raw strings) avoids false
//! negatives from field-ordering differences.

use jokes_core::{
    ApiClient, ApiError, HttpRequest, HttpResponse, HttpTransport, JokeRecord, TransportError,
};
use serde_json::Value;

/// The vectors exercise parsing only; any attempt to hit the network is a
/// bug in the test.
struct NoTransport;

impl HttpTransport for NoTransport {
    fn execute(&self, _request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        panic!("vector tests must not perform I/O");
    }
}

fn client() -> ApiClient {
    ApiClient::new("http://localhost:3000", Box::new(NoTransport))
}

#[test]
fn response_classification_vectors() {
    let raw = include_str!("../../test-vectors/responses.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let endpoint = case["endpoint"].as_str().unwrap();
        let response = HttpResponse {
            status: case["response"]["status"].as_u64().unwrap() as u16,
            body: case["response"]["body"].as_str().unwrap().to_string(),
        };

        let outcome = c.parse_get(endpoint, &response);
        match case["expect"]["kind"].as_str().unwrap() {
            "ok" => {
                let value = outcome.unwrap_or_else(|e| panic!("{name}: expected Ok, got {e}"));
                assert_eq!(&value, &case["expect"]["value"], "{name}: value");
            }
            "http_error" => match outcome.unwrap_err() {
                ApiError::Processing { endpoint: observed, status } => {
                    assert_eq!(observed, endpoint, "{name}: endpoint");
                    assert_eq!(
                        status,
                        Some(case["expect"]["status"].as_u64().unwrap() as u16),
                        "{name}: status"
                    );
                }
                other => panic!("{name}: expected Processing, got {other:?}"),
            },
            "invalid_body" => {
                assert!(
                    matches!(
                        outcome.unwrap_err(),
                        ApiError::Processing { status: None, .. }
                    ),
                    "{name}"
                );
            }
            other => panic!("unknown expectation kind: {other}"),
        }
    }
}

#[test]
fn random_joke_decode_vectors() {
    let raw = include_str!("../../test-vectors/random_jokes.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let category = case["category"].as_str().unwrap();
        let decoded = JokeRecord::from_value(category, &case["payload"]);

        let expect = &case["expect"];
        if expect.is_null() {
            assert!(decoded.is_none(), "{name}: expected no record");
            continue;
        }
        let record = decoded.unwrap_or_else(|| panic!("{name}: expected a record"));
        assert_eq!(record.id, expect["id"].as_str().unwrap(), "{name}: id");
        assert_eq!(record.url, expect["url"].as_str().unwrap(), "{name}: url");
        assert_eq!(record.value, expect["value"].as_str().unwrap(), "{name}: value");
        assert_eq!(
            record.category,
            expect["category"].as_str().unwrap(),
            "{name}: category"
        );
    }
}
