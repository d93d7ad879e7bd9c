//! Shared fixtures for the pipeline integration tests.

#![allow(dead_code)]

use reestr_config::RegistryConfig;
use reestr_service::HttpRegistryClient;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the fake registry serves its listing on.
pub const OBJECTS_PATH: &str = "/p/ru/api/v1/gr-objects";

/// A registry object in wire format.
pub fn object(bin: &str, name: &str, status: &str) -> Value {
    json!({
        "flBin": bin,
        "flNameRu": name,
        "flOpf": "ГУ",
        "flKfsL0": "2",
        "flKfsL1": "242",
        "flKfsL2": null,
        "flOkedL0": "84",
        "flStateInvolvement": "100",
        "flStatus": status,
        "flOwnerBin": null,
        "flOguBin": "990240000001"
    })
}

/// The listing body the registry returns.
pub fn listing(objects: Vec<Value>) -> Value {
    let total = objects.len();
    json!({ "Objects": objects, "Total": total })
}

/// Fake registry answering every listing request with `body`.
///
/// `expected_calls` is verified when the server is dropped.
pub async fn registry_serving(body: Value, expected_calls: u64) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(OBJECTS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected_calls)
        .mount(&server)
        .await;
    server
}

/// HTTP client pointed at `server`.
pub fn client_for(server: &MockServer) -> HttpRegistryClient {
    client_with_timeout(server, 5)
}

/// HTTP client pointed at `server` with a total timeout of `timeout_secs`.
pub fn client_with_timeout(server: &MockServer, timeout_secs: u64) -> HttpRegistryClient {
    let config = RegistryConfig {
        url: format!("{}{}", server.uri(), OBJECTS_PATH),
        timeout_secs,
        connect_timeout_secs: 1,
        ..RegistryConfig::default()
    };
    HttpRegistryClient::new(&config).expect("client builds")
}
