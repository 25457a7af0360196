//! Integration tests for the `mfrcat` CLI binary.
//!
//! Argument parsing, help output, completions, and error handling run
//! offline; the end-to-end list/show/types tests run against a wiremock
//! server injected via --base-url.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `mfrcat` binary with env isolation.
///
/// Clears all `MFRCAT_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn mfrcat_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("mfrcat");
    cmd.env("HOME", "/tmp/mfrcat-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/mfrcat-cli-test-nonexistent")
        .env_remove("MFRCAT_BASE_URL")
        .env_remove("MFRCAT_TIMEOUT_SECS")
        .env_remove("MFRCAT_OUTPUT")
        .env_remove("NO_COLOR");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

async fn mock_catalog_server() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vehicles/getallmanufacturers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Count": 3,
            "Message": "ok",
            "Results": [
                {"Mfr_ID": 1, "Mfr_Name": "Acme Motors", "Country": "USA",
                 "VehicleTypes": [{"Name": "Truck"}, {"Name": "Bus"}]},
                {"Mfr_ID": 2, "Mfr_Name": "Beta Vehicles", "Country": "GERMANY",
                 "VehicleTypes": [{"Name": "Passenger Car"}]},
                {"Mfr_ID": 3, "Mfr_Name": "Gamma Holdings", "Country": "JAPAN",
                 "VehicleTypes": []}
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/vehicles/getmanufacturerdetails/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Count": 1,
            "Message": "ok",
            "Results": [{
                "Mfr_Name": "Acme Motors",
                "Mfr_RegisteredName": "Acme Motors LLC",
                "Current_Head": "Jo Smith",
                "Current_Head_Exec_Title": "CEO",
                "Address": "1 Acme Way",
                "City": "Detroit",
                "State": "MICHIGAN",
                "Zip": "48201"
            }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/vehicles/getmanufacturerdetails/404"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Count": 0,
            "Message": "no results",
            "Results": []
        })))
        .mount(&server)
        .await;

    server
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = mfrcat_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    mfrcat_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("manufacturer")
            .and(predicate::str::contains("list"))
            .and(predicate::str::contains("show"))
            .and(predicate::str::contains("types")),
    );
}

#[test]
fn test_version_flag() {
    mfrcat_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mfrcat"));
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    let output = mfrcat_cmd().arg("frobnicate").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_show_requires_numeric_id() {
    let output = mfrcat_cmd().args(["show", "tesla"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    mfrcat_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    mfrcat_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mfrcat"));
}

// ── Config inspection ───────────────────────────────────────────────

#[test]
fn test_config_path_prints_a_path() {
    mfrcat_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_show_prints_defaults() {
    mfrcat_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("base_url")
                .and(predicate::str::contains("vpic.nhtsa.dot.gov")),
        );
}

// ── End-to-end against a mock server ────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_list_renders_filtered_table() {
    let server = mock_catalog_server().await;

    let output = mfrcat_cmd()
        .args(["--base-url", server.uri().as_str(), "list"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", combined_output(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Acme Motors"));
    assert!(stdout.contains("Beta Vehicles"));
    // Zero vehicle types — excluded from the view.
    assert!(!stdout.contains("Gamma Holdings"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_search_filter_is_case_insensitive() {
    let server = mock_catalog_server().await;

    let output = mfrcat_cmd()
        .args(["--base-url", server.uri().as_str(), "list", "--search", "ACME"])
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Acme Motors"));
    assert!(!stdout.contains("Beta Vehicles"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_vehicle_type_filter_is_exact() {
    let server = mock_catalog_server().await;

    let output = mfrcat_cmd()
        .args(["--base-url", server.uri().as_str(), "list", "--vehicle-type", "Truck"])
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Acme Motors"));
    assert!(!stdout.contains("Beta Vehicles"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_plain_output_emits_ids() {
    let server = mock_catalog_server().await;

    let output = mfrcat_cmd()
        .args(["--base-url", server.uri().as_str(), "--output", "plain", "list"])
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "1\n2");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_json_output_is_valid_json() {
    let server = mock_catalog_server().await;

    let output = mfrcat_cmd()
        .args(["--base-url", server.uri().as_str(), "--output", "json", "list"])
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
    assert_eq!(parsed[0]["name"], "Acme Motors");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_show_renders_detail_record() {
    let server = mock_catalog_server().await;

    let output = mfrcat_cmd()
        .args(["--base-url", server.uri().as_str(), "show", "1"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", combined_output(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Acme Motors"));
    assert!(stdout.contains("Jo Smith (CEO)"));
    assert!(stdout.contains("Detroit, MICHIGAN 48201"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_show_missing_manufacturer_exits_not_found() {
    let server = mock_catalog_server().await;

    let output = mfrcat_cmd()
        .args(["--base-url", server.uri().as_str(), "show", "404"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(4), "{}", combined_output(&output));
    let text = combined_output(&output);
    assert!(text.contains("not found"), "unexpected output:\n{text}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_types_lists_distinct_options() {
    let server = mock_catalog_server().await;

    let output = mfrcat_cmd()
        .args(["--base-url", server.uri().as_str(), "--output", "plain", "types"])
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "Truck\nBus\nPassenger Car");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_error_exits_nonzero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/vehicles/getallmanufacturers"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let output = mfrcat_cmd()
        .args(["--base-url", server.uri().as_str(), "list"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1), "{}", combined_output(&output));
}
