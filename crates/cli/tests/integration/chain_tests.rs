//! Integration tests for the discover and balance commands.

use predicates::prelude::*;

use super::helpers::{
    abi_string, abi_uint, oracle_watch_cmd_with_mock, start_mock_server, RpcStub,
};

const NAME: &str = "0x06fdde03";
const SYMBOL: &str = "0x95d89b41";
const DECIMALS: &str = "0x313ce567";
const BALANCE_OF: &str = "0x70a08231";
const ALLOWANCE: &str = "0xdd62ed3e";

const USDC: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
const OWNER: &str = "0x1111111111111111111111111111111111111111";
const SPENDER: &str = "0x2222222222222222222222222222222222222222";

fn usdc_node() -> RpcStub {
    RpcStub::new()
        .on(NAME, abi_string("USD Coin"))
        .on(SYMBOL, abi_string("USDC"))
        .on(DECIMALS, abi_uint(6))
        .on(BALANCE_OF, abi_uint(1_500_000))
        .on(ALLOWANCE, abi_uint(u128::MAX))
}

#[tokio::test]
async fn test_balance_with_allowance() {
    let api = start_mock_server().await;
    let node = usdc_node().start().await;

    oracle_watch_cmd_with_mock(&api)
        .args([
            "balance",
            USDC,
            OWNER,
            "--spender",
            SPENDER,
            "--rpc-url",
            &node.uri(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("USD Coin (USDC)"))
        .stdout(predicate::str::contains("Balance:   1.5 USDC"))
        .stdout(predicate::str::contains("Allowance:"));
}

#[tokio::test]
async fn test_balance_json() {
    let api = start_mock_server().await;
    let node = usdc_node().start().await;

    let output = oracle_watch_cmd_with_mock(&api)
        .args(["balance", USDC, OWNER, "--rpc-url", &node.uri(), "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["balance"], "1500000");
    assert_eq!(value["token"]["decimals"], 6);
    assert!(value["allowance"].is_null());
}

#[tokio::test]
async fn test_discover_not_a_vault() {
    let api = start_mock_server().await;
    // Every call reverts
    let node = RpcStub::new().start().await;

    oracle_watch_cmd_with_mock(&api)
        .args(["discover", USDC, "--rpc", &format!("ethereum={}", node.uri())])
        .assert()
        .success()
        .stdout(predicate::str::contains("No vaults found."));
}
