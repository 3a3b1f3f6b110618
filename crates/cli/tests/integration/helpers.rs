//! Test helper utilities for CLI integration tests.

#![allow(deprecated)] // Command::cargo_bin deprecation
#![allow(dead_code)]

use std::collections::HashMap;

use assert_cmd::Command;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Start a mock API server.
pub async fn start_mock_server() -> MockServer {
    MockServer::start().await
}

/// Create a CLI command with Kong and yDaemon pointed at a mock server.
pub fn oracle_watch_cmd_with_mock(mock: &MockServer) -> Command {
    let mut cmd = oracle_watch_cmd();
    cmd.env("KONG_API_URL", format!("{}/graphql", mock.uri()));
    cmd.env("YDAEMON_API_URL", mock.uri());
    cmd
}

/// Create a CLI command without mock server (for validation tests).
pub fn oracle_watch_cmd() -> Command {
    let mut cmd = Command::cargo_bin("oracle-watch").unwrap();
    cmd.env_remove("RPC_URL")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Load a fixture file as a string.
pub fn load_fixture(name: &str) -> String {
    let path = format!(
        "{}/tests/fixtures/{}.json",
        env!("CARGO_MANIFEST_DIR"),
        name
    );
    std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", path))
}

/// Mock a Kong GraphQL POST request with a fixture response.
pub async fn mock_graphql_response(server: &MockServer, fixture_name: &str) {
    let body = load_fixture(fixture_name);
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Mock a GraphQL error response.
pub async fn mock_graphql_error(server: &MockServer, error_message: &str) {
    let body = format!(
        r#"{{"errors":[{{"message":"{}"}}],"data":null}}"#,
        error_message
    );
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Mock the yDaemon price endpoint with a fixture response.
pub async fn mock_prices_response(server: &MockServer, fixture_name: &str) {
    let body = load_fixture(fixture_name);
    Mock::given(method("GET"))
        .and(path("/prices/all"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// JSON-RPC node answering `eth_call` by 4-byte selector.
///
/// Calls with an unknown selector get `fallback`, or revert when there is
/// none.
#[derive(Clone, Default)]
pub struct RpcStub {
    by_selector: HashMap<String, String>,
    fallback: Option<String>,
}

impl RpcStub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer calls to `selector` (e.g. `"0x70a08231"`) with ABI-encoded hex.
    pub fn on(mut self, selector: &str, result: String) -> Self {
        self.by_selector.insert(selector.to_lowercase(), result);
        self
    }

    /// Answer every other call with `result`.
    pub fn otherwise(mut self, result: String) -> Self {
        self.fallback = Some(result);
        self
    }

    pub async fn start(self) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST")).respond_with(self).mount(&server).await;
        server
    }

    fn handle(&self, request: &Value) -> Value {
        let id = request["id"].clone();
        match request["method"].as_str() {
            Some("eth_chainId") => json!({"jsonrpc": "2.0", "id": id, "result": "0x1"}),
            Some("eth_call") => {
                let tx = &request["params"][0];
                let input = tx
                    .get("input")
                    .filter(|v| !v.is_null())
                    .or_else(|| tx.get("data"))
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_lowercase();
                let selector = input.get(..10).unwrap_or_default();

                match self.by_selector.get(selector).or(self.fallback.as_ref()) {
                    Some(result) => json!({"jsonrpc": "2.0", "id": id, "result": result}),
                    None => json!({
                        "jsonrpc": "2.0",
                        "id": id,
                        "error": {"code": 3, "message": "execution reverted", "data": "0x"},
                    }),
                }
            }
            _ => json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": {"code": -32601, "message": "method not found"},
            }),
        }
    }
}

impl Respond for RpcStub {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = match serde_json::from_slice(&request.body) {
            Ok(body) => body,
            Err(_) => return ResponseTemplate::new(400),
        };
        let response = match body {
            Value::Array(batch) => Value::Array(batch.iter().map(|r| self.handle(r)).collect()),
            single => self.handle(&single),
        };
        ResponseTemplate::new(200).set_body_json(response)
    }
}

/// A single ABI-encoded `uint256`.
pub fn abi_uint(value: u128) -> String {
    format!("0x{:064x}", value)
}

/// A single ABI-encoded `string`.
pub fn abi_string(value: &str) -> String {
    let data: String = value.bytes().map(|b| format!("{:02x}", b)).collect();
    let padded_len = value.len().div_ceil(32) * 64;
    format!(
        "0x{:064x}{:064x}{:0<width$}",
        32,
        value.len(),
        data,
        width = padded_len
    )
}

/// `percent`% in the oracle's 1e18 scale.
pub fn wad_percent(percent: u128) -> u128 {
    percent * 10u128.pow(16)
}
