//! Test helper utilities for API crate integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use alloy::primitives::{Address, U256};
use alloy::sol_types::{sol_data, SolType, SolValue};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};
use yearn_oracle_watch_api::ClientConfig;

/// Start a mock Kong / yDaemon server.
pub async fn start_mock_server() -> MockServer {
    MockServer::start().await
}

/// Create a ClientConfig pointing Kong and yDaemon at a mock server, with
/// fast retries.
pub fn client_config_with_mock(mock: &MockServer) -> ClientConfig {
    ClientConfig::new()
        .with_kong_url(format!("{}/graphql", mock.uri()))
        .with_ydaemon_url(mock.uri())
        .with_retry_base_delay_ms(10)
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

/// Mock a GraphQL response with one error per message.
pub async fn mock_graphql_errors(server: &MockServer, error_messages: &[&str]) {
    let errors: Vec<Value> = error_messages
        .iter()
        .map(|msg| json!({ "message": msg }))
        .collect();
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "errors": errors, "data": null })),
        )
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

/// Handler receiving the ABI-encoded call arguments (selector stripped).
/// Returning `None` makes the call revert.
pub type CallHandler = Arc<dyn Fn(&[u8]) -> Option<Vec<u8>> + Send + Sync>;

/// JSON-RPC node answering `eth_call` from `(to, selector)` handlers.
/// Unknown calls revert.
#[derive(Clone, Default)]
pub struct MockRpc {
    handlers: HashMap<(Address, [u8; 4]), CallHandler>,
}

impl MockRpc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_call(
        mut self,
        to: Address,
        selector: [u8; 4],
        handler: impl Fn(&[u8]) -> Option<Vec<u8>> + Send + Sync + 'static,
    ) -> Self {
        self.handlers.insert((to, selector), Arc::new(handler));
        self
    }

    pub fn returns(self, to: Address, selector: [u8; 4], data: Vec<u8>) -> Self {
        self.on_call(to, selector, move |_| Some(data.clone()))
    }

    /// Start a dedicated server answering every POST with this mock.
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
                let to = tx["to"].as_str().and_then(|s| s.parse::<Address>().ok());
                let input = tx
                    .get("input")
                    .filter(|v| !v.is_null())
                    .or_else(|| tx.get("data"))
                    .and_then(|v| v.as_str())
                    .and_then(|s| alloy::primitives::hex::decode(s).ok());

                let output = match (to, input) {
                    (Some(to), Some(input)) if input.len() >= 4 => {
                        let selector = [input[0], input[1], input[2], input[3]];
                        self.handlers
                            .get(&(to, selector))
                            .and_then(|handler| handler(&input[4..]))
                    }
                    _ => None,
                };

                match output {
                    Some(data) => json!({
                        "jsonrpc": "2.0",
                        "id": id,
                        "result": format!("0x{}", alloy::primitives::hex::encode(data)),
                    }),
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

impl Respond for MockRpc {
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

pub fn encode_u256(value: U256) -> Vec<u8> {
    (value,).abi_encode_params()
}

pub fn encode_u8(value: u8) -> Vec<u8> {
    <(sol_data::Uint<8>,) as SolType>::abi_encode_params(&(value,))
}

pub fn encode_address(value: Address) -> Vec<u8> {
    (value,).abi_encode_params()
}

pub fn encode_string(value: &str) -> Vec<u8> {
    (value.to_string(),).abi_encode_params()
}

/// `percent`% in the oracle's 1e18 scale.
pub fn wad_percent(percent: u64) -> U256 {
    U256::from(percent) * U256::from(10u64).pow(U256::from(16u64))
}

/// Whether the `int256` at argument `index` is zero.
pub fn arg_is_zero(args: &[u8], index: usize) -> bool {
    args.get(index * 32..(index + 1) * 32)
        .is_some_and(|word| word.iter().all(|b| *b == 0))
}

/// The `int256` at argument `index`, read as an unsigned word.
pub fn arg_word(args: &[u8], index: usize) -> Option<U256> {
    args.get(index * 32..(index + 1) * 32)
        .map(U256::from_be_slice)
}
