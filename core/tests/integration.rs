//! Collection pipeline against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the client and
//! collector over real HTTP using a ureq-backed transport. Validates the
//! end-to-end contract: classification of live statuses, per-category
//! soft-failure absorption, and the assembled record set.

use std::net::SocketAddr;

use jokes_core::{
    ApiClient, ApiError, Collector, HttpRequest, HttpResponse, HttpTransport, TransportError,
    PLACEHOLDER,
};
use serde_json::json;

/// Transport backed by ureq with status-as-data, mirroring the production
/// one; defined here so the core crate stays free of HTTP dependencies.
struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
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

/// Boot the mock server on a random port and return its address.
fn spawn_mock_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn live_client(addr: SocketAddr) -> ApiClient {
    ApiClient::new(&format!("http://{addr}"), Box::new(UreqTransport::new()))
}

#[test]
fn categories_listing_round_trips() {
    let addr = spawn_mock_server();
    let value = live_client(addr).get("categories", &[]).unwrap();
    assert_eq!(value, json!(["dev", "food", "history", "sport"]));
}

#[test]
fn collect_all_jokes_end_to_end() {
    let addr = spawn_mock_server();
    let collector = Collector::new(live_client(addr));

    let jokes = collector.collect_all_jokes().unwrap();

    // Seeded data: dev, food and history carry a joke; sport is empty and
    // must contribute nothing.
    let categories: Vec<_> = jokes.iter().map(|j| j.category.as_str()).collect();
    assert_eq!(categories, vec!["dev", "food", "history"]);

    for joke in &jokes {
        assert_ne!(joke.id, PLACEHOLDER);
        assert_ne!(joke.value, PLACEHOLDER);
    }

    // The history joke is served without a url key.
    let history = jokes.iter().find(|j| j.category == "history").unwrap();
    assert_eq!(history.url, PLACEHOLDER);
    let dev = jokes.iter().find(|j| j.category == "dev").unwrap();
    assert_ne!(dev.url, PLACEHOLDER);
}

#[test]
fn empty_category_yields_no_record() {
    let addr = spawn_mock_server();
    let collector = Collector::new(live_client(addr));
    assert!(collector.joke_for_category("sport").unwrap().is_none());
}

#[test]
fn unknown_category_is_a_hard_failure() {
    let addr = spawn_mock_server();
    let collector = Collector::new(live_client(addr));
    let err = collector.joke_for_category("nonexistent").unwrap_err();
    assert!(matches!(
        err,
        ApiError::Processing { status: Some(404), .. }
    ));
}

#[test]
fn unknown_endpoint_classifies_as_http_error() {
    let addr = spawn_mock_server();
    let err = live_client(addr).get("no-such-endpoint", &[]).unwrap_err();
    match err {
        ApiError::Processing { endpoint, status } => {
            assert_eq!(endpoint, "no-such-endpoint");
            assert_eq!(status, Some(404));
        }
        other => panic!("expected Processing, got {other:?}"),
    }
}

#[test]
fn unreachable_server_classifies_as_network_error() {
    // Bind then drop a listener so the port is known to be closed.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = live_client(addr).get("categories", &[]).unwrap_err();
    assert!(matches!(err, ApiError::Network { .. }));
}
