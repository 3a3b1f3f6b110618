//! Integration tests for the vaults commands.

use predicates::prelude::*;

use super::helpers::{
    mock_graphql_error, mock_graphql_response, oracle_watch_cmd_with_mock, start_mock_server,
};

#[tokio::test]
async fn test_vaults_list_table_output() {
    let server = start_mock_server().await;
    mock_graphql_response(&server, "kong_vaults").await;

    oracle_watch_cmd_with_mock(&server)
        .args(["vaults", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("USDC-1 yVault"))
        .stdout(predicate::str::contains("WETH yVault"))
        .stdout(predicate::str::contains("4.12%"))
        // Fantom is excluded by default and the bad address is dropped
        .stdout(predicate::str::contains("yvDAI").not())
        .stdout(predicate::str::contains("Broken yVault").not());
}

#[tokio::test]
async fn test_vaults_list_json_output() {
    let server = start_mock_server().await;
    mock_graphql_response(&server, "kong_vaults").await;

    let output = oracle_watch_cmd_with_mock(&server)
        .args(["vaults", "list", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let vaults: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let vaults = vaults.as_array().unwrap();
    assert_eq!(vaults.len(), 3);
    assert_eq!(vaults[0]["symbol"], "yvUSDC-1");
    assert_eq!(vaults[0]["asset"]["decimals"], 6);
}

#[tokio::test]
async fn test_vaults_list_with_chain_filter() {
    let server = start_mock_server().await;
    mock_graphql_response(&server, "kong_vaults").await;

    oracle_watch_cmd_with_mock(&server)
        .args(["vaults", "list", "--chain", "base"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WETH yVault"))
        .stdout(predicate::str::contains("USDC-1 yVault").not());
}

#[tokio::test]
async fn test_vaults_list_with_search_and_limit() {
    let server = start_mock_server().await;
    mock_graphql_response(&server, "kong_vaults").await;

    oracle_watch_cmd_with_mock(&server)
        .args(["vaults", "list", "--search", "weth"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WETH yVault"))
        .stdout(predicate::str::contains("USDC-1 yVault").not());

    oracle_watch_cmd_with_mock(&server)
        .args(["vaults", "list", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("USDC-1 yVault"))
        .stdout(predicate::str::contains("WETH yVault").not());
}

#[tokio::test]
async fn test_vaults_list_no_matches() {
    let server = start_mock_server().await;
    mock_graphql_response(&server, "kong_vaults").await;

    oracle_watch_cmd_with_mock(&server)
        .args(["vaults", "list", "--search", "nothing-like-this"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No vaults found."));
}

#[tokio::test]
async fn test_vaults_info_detail() {
    let server = start_mock_server().await;
    mock_graphql_response(&server, "kong_vault").await;

    oracle_watch_cmd_with_mock(&server)
        .args([
            "vaults",
            "info",
            "0xBe53A109B494E5c9f97b9Cd39Fe969BE68BF6204",
            "--chain",
            "ethereum",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("USDC-1 yVault"))
        .stdout(predicate::str::contains("API Version: 3.0.2"))
        .stdout(predicate::str::contains("https://etherscan.io/address/"));
}

#[tokio::test]
async fn test_vaults_list_graphql_error() {
    let server = start_mock_server().await;
    mock_graphql_error(&server, "Query too complex").await;

    oracle_watch_cmd_with_mock(&server)
        .args(["vaults", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Query too complex"));
}
