//! Integration tests for the prices command.

use predicates::prelude::*;

use super::helpers::{mock_prices_response, oracle_watch_cmd_with_mock, start_mock_server};

#[tokio::test]
async fn test_prices_table_for_chain() {
    let server = start_mock_server().await;
    mock_prices_response(&server, "ydaemon_prices").await;

    oracle_watch_cmd_with_mock(&server)
        .args(["prices", "--chain", "ethereum"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$1.00"))
        .stdout(predicate::str::contains("$2.50K").not());
}

#[tokio::test]
async fn test_prices_json_sorted_by_chain() {
    let server = start_mock_server().await;
    mock_prices_response(&server, "ydaemon_prices").await;

    let output = oracle_watch_cmd_with_mock(&server)
        .args(["prices", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let chains: Vec<u64> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["chainId"].as_u64().unwrap())
        .collect();
    assert_eq!(chains, vec![1, 1, 137, 8453]);
}

#[tokio::test]
async fn test_prices_single_token() {
    let server = start_mock_server().await;
    mock_prices_response(&server, "ydaemon_prices").await;

    oracle_watch_cmd_with_mock(&server)
        .args([
            "prices",
            "--chain",
            "base",
            "--token",
            "0x4200000000000000000000000000000000000006",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("$2.50K"));
}

#[tokio::test]
async fn test_prices_unknown_token() {
    let server = start_mock_server().await;
    mock_prices_response(&server, "ydaemon_prices").await;

    oracle_watch_cmd_with_mock(&server)
        .args([
            "prices",
            "--chain",
            "base",
            "--token",
            "0x0000000000000000000000000000000000000001",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No price found"));
}
