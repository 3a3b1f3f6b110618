//! Integration tests for the query and sweep commands.

use predicates::prelude::*;

use super::helpers::{
    abi_uint, mock_graphql_response, mock_prices_response, oracle_watch_cmd_with_mock,
    start_mock_server, wad_percent, RpcStub,
};

const USDC_VAULT: &str = "0xBe53A109B494E5c9f97b9Cd39Fe969BE68BF6204";

#[tokio::test]
async fn test_query_current_apr() {
    let api = start_mock_server().await;
    mock_graphql_response(&api, "kong_vaults").await;
    let node = RpcStub::new()
        .otherwise(abi_uint(wad_percent(5)))
        .start()
        .await;

    oracle_watch_cmd_with_mock(&api)
        .args(["query", USDC_VAULT, "--rpc-url", &node.uri()])
        .assert()
        .success()
        .stdout(predicate::str::contains("USDC-1 yVault"))
        .stdout(predicate::str::contains("Current APR:   5.00%"))
        .stdout(predicate::str::contains("Projected APR: 5.00%"));
}

#[tokio::test]
async fn test_query_usd_deposit_json() {
    let api = start_mock_server().await;
    mock_graphql_response(&api, "kong_vaults").await;
    mock_prices_response(&api, "ydaemon_prices").await;
    let node = RpcStub::new()
        .otherwise(abi_uint(wad_percent(4)))
        .start()
        .await;

    let output = oracle_watch_cmd_with_mock(&api)
        .args([
            "query",
            USDC_VAULT,
            "1000",
            "--usd",
            "--rpc-url",
            &node.uri(),
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let quote: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(quote["asset_price"], 0.9998);
    assert_eq!(quote["apr"]["currentApr"], "4.00%");
    assert_eq!(quote["direction"], "deposit");
}

#[tokio::test]
async fn test_query_rejects_bad_vault_address() {
    let api = start_mock_server().await;

    oracle_watch_cmd_with_mock(&api)
        .args(["query", "0x1234", "--rpc-url", "http://localhost:1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid vault address"));
}

#[tokio::test]
async fn test_sweep_writes_reports() {
    let api = start_mock_server().await;
    mock_graphql_response(&api, "kong_vaults").await;
    let node = RpcStub::new()
        .otherwise(abi_uint(wad_percent(5)))
        .start()
        .await;

    let output_dir = std::env::temp_dir().join(format!("oracle-watch-sweep-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&output_dir);

    // Polygon has no RPC endpoint and fails as an unsupported chain
    oracle_watch_cmd_with_mock(&api)
        .args([
            "sweep",
            "--rpc",
            &format!("ethereum={}", node.uri()),
            "--rpc",
            &format!("base={}", node.uri()),
            "--output-dir",
            output_dir.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vaults:           3"))
        .stdout(predicate::str::contains("Unsupported Chain: 1"));

    let mut names: Vec<String> = std::fs::read_dir(&output_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    assert_eq!(names.len(), 3);
    assert!(names[0].starts_with("apr-oracle-sweep-results-"));
    assert!(names[1].starts_with("apr-oracle-sweep-summary-"));
    assert!(names[2].starts_with("failed-vaults-"));

    let _ = std::fs::remove_dir_all(&output_dir);
}

#[tokio::test]
async fn test_sweep_without_vaults_fails() {
    let api = start_mock_server().await;
    mock_graphql_response(&api, "kong_vaults").await;

    let output_dir =
        std::env::temp_dir().join(format!("oracle-watch-empty-sweep-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&output_dir);

    // Kong lists nothing on Arbitrum
    oracle_watch_cmd_with_mock(&api)
        .args([
            "sweep",
            "--rpc",
            "arbitrum=http://localhost:1",
            "--chain",
            "arbitrum",
            "--output-dir",
            output_dir.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No vault data found"));

    assert!(!output_dir.exists());
}
