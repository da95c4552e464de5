//! Binary-level tests for the CLI surface.
//!
//! These run the built `geopub` binary and check argument handling and the
//! fatal configuration-error paths. None of them reach the network: every
//! invocation fails (or completes) before a request would be issued.

use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn geopub() -> Command {
    Command::cargo_bin("geopub").unwrap()
}

#[test]
fn no_arguments_prints_usage_and_fails() {
    geopub()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn missing_mode_prints_usage_and_fails() {
    geopub()
        .arg("geoserver.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_mode_is_rejected() {
    geopub()
        .args(["geoserver.json", "delete_layers", "rasters"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn filtered_layers_without_pattern_fails() {
    geopub()
        .args(["geoserver.json", "filtered_layers", "rasters"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn missing_config_file_is_fatal() {
    geopub()
        .args(["/nonexistent/geoserver.json", "single_layer", "a_tiled.tif"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn malformed_config_file_is_fatal() {
    let dir = assert_fs::TempDir::new().unwrap();
    let config = dir.child("geoserver.json");
    config.write_str("{not json").unwrap();

    geopub()
        .args([
            config.path().to_str().unwrap(),
            "multiple_layers",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config file"));
}

#[test]
fn config_missing_keys_is_fatal() {
    let dir = assert_fs::TempDir::new().unwrap();
    let config = dir.child("geoserver.json");
    config
        .write_str(r#"{"base_url":"http://gs/geoserver/rest/"}"#)
        .unwrap();

    geopub()
        .args([
            config.path().to_str().unwrap(),
            "single_layer",
            "a_tiled.tif",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config file"));
}

#[test]
fn completion_generates_a_script_without_reading_config() {
    geopub()
        .args(["geoserver.json", "completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("geopub"));
}

#[test]
fn help_lists_all_modes() {
    geopub()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("single_layer")
                .and(predicate::str::contains("multiple_layers"))
                .and(predicate::str::contains("filtered_layers")),
        );
}
