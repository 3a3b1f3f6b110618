//! JSON-RPC mock used to exercise contract clients without a node.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use alloy::primitives::{Address, U256};
use alloy::sol_types::{sol_data, SolType, SolValue};
use serde_json::{json, Value};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Handler receiving the ABI-encoded call arguments (selector stripped).
/// Returning `None` makes the call revert.
pub type CallHandler = Arc<dyn Fn(&[u8]) -> Option<Vec<u8>> + Send + Sync>;

/// Answers `eth_call` requests from a table of `(to, selector)` handlers.
/// Unknown calls revert.
#[derive(Clone, Default)]
pub struct MockRpc {
    handlers: HashMap<(Address, [u8; 4]), CallHandler>,
}

impl MockRpc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for calls to `to` with `selector`.
    pub fn on_call(
        mut self,
        to: Address,
        selector: [u8; 4],
        handler: impl Fn(&[u8]) -> Option<Vec<u8>> + Send + Sync + 'static,
    ) -> Self {
        self.handlers.insert((to, selector), Arc::new(handler));
        self
    }

    /// Always return `data` for calls to `to` with `selector`.
    pub fn returns(self, to: Address, selector: [u8; 4], data: Vec<u8>) -> Self {
        self.on_call(to, selector, move |_| Some(data.clone()))
    }

    /// Mount the mock on a server for every POST request.
    pub async fn mount(self, server: &MockServer) {
        Mock::given(method("POST")).respond_with(self).mount(server).await;
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

/// Whether the `int256` at argument `index` is zero.
pub fn arg_is_zero(args: &[u8], index: usize) -> bool {
    args.get(index * 32..(index + 1) * 32)
        .is_some_and(|word| word.iter().all(|b| *b == 0))
}

/// Whether the `int256` at argument `index` is negative.
pub fn arg_is_negative(args: &[u8], index: usize) -> bool {
    args.get(index * 32).is_some_and(|b| *b & 0x80 != 0)
}
