//! CLI argument validation tests.
//!
//! These tests verify that the CLI properly validates arguments and provides
//! helpful error messages without requiring network access.

use predicates::prelude::*;

use super::helpers::oracle_watch_cmd;

#[test]
fn test_help_output() {
    oracle_watch_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("oracle-watch"))
        .stdout(predicate::str::contains("vaults"))
        .stdout(predicate::str::contains("query"))
        .stdout(predicate::str::contains("sweep"));
}

#[test]
fn test_vaults_help_output() {
    oracle_watch_cmd()
        .args(["vaults", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("info"));
}

#[test]
fn test_invalid_command() {
    oracle_watch_cmd()
        .arg("invalid_command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_vaults_info_missing_address() {
    oracle_watch_cmd()
        .args(["vaults", "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_query_requires_rpc_url() {
    oracle_watch_cmd()
        .args(["query", "0xBe53A109B494E5c9f97b9Cd39Fe969BE68BF6204"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--rpc-url"));
}

#[test]
fn test_sweep_requires_rpc() {
    oracle_watch_cmd()
        .arg("sweep")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--rpc"));
}

#[test]
fn test_malformed_rpc_argument() {
    oracle_watch_cmd()
        .args(["discover", "0xBe53A109B494E5c9f97b9Cd39Fe969BE68BF6204", "--rpc", "http://localhost:8545"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CHAIN=URL"));
}

#[test]
fn test_invalid_chain_value() {
    oracle_watch_cmd()
        .args(["vaults", "list", "--chain", "invalid_chain"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown chain"));
}

#[test]
fn test_prices_token_requires_chain() {
    oracle_watch_cmd()
        .args(["prices", "--token", "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--chain"));
}

#[test]
fn test_invalid_output_format() {
    oracle_watch_cmd()
        .args(["vaults", "list", "--format", "invalid_format"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_vaults_list_help() {
    oracle_watch_cmd()
        .args(["vaults", "list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--chain"))
        .stdout(predicate::str::contains("--search"))
        .stdout(predicate::str::contains("--limit"));
}
