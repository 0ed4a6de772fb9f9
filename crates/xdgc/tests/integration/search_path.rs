//! Search-path command tests

use super::common::{TestEnv, bare_cmd};
use predicates::prelude::*;

#[test]
fn test_search_path_defaults() {
    bare_cmd()
        .args(["search-path", "data"])
        .assert()
        .success()
        .stdout("/usr/local/share:/usr/share\n");

    bare_cmd()
        .args(["search-path", "config"])
        .assert()
        .success()
        .stdout("/etc/xdg\n");
}

#[test]
fn test_search_path_override_unsplit() {
    TestEnv::new()
        .with("XDG_DATA_DIRS", "/a:/b::/c/")
        .cmd()
        .args(["search-path", "data"])
        .assert()
        .success()
        .stdout("/a:/b::/c/\n");
}

#[test]
fn test_search_path_json() {
    let output = TestEnv::new()
        .with("XDG_CONFIG_DIRS", "/etc/xdg/custom:/etc/xdg")
        .cmd()
        .args(["search-path", "config", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["variable"], "XDG_CONFIG_DIRS");
    assert_eq!(json["value"], "/etc/xdg/custom:/etc/xdg");
}

#[test]
fn test_search_path_verbose() {
    bare_cmd()
        .args(["-v", "--no-color", "search-path", "config"])
        .assert()
        .success()
        .stderr(predicate::str::contains("XDG_CONFIG_DIRS unset, using default"));
}

#[test]
fn test_search_path_unknown_kind() {
    bare_cmd()
        .args(["search-path", "cache"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown search path"));
}
