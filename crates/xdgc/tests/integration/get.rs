//! Get command tests

use super::common::{TestEnv, bare_cmd, stdout_line};
use predicates::prelude::*;

#[test]
fn test_get_defaults_under_home() {
    let env = TestEnv::new();
    let expected = [
        ("data-home", ".local/share"),
        ("config-home", ".config"),
        ("state-home", ".local/state"),
        ("cache-home", ".cache"),
        ("bin-home", ".local/bin"),
    ];

    for (category, suffix) in expected {
        let output = env.cmd().args(["get", category]).output().unwrap();
        assert!(output.status.success(), "get {category} failed");
        assert_eq!(
            stdout_line(&output),
            env.under_home(suffix).display().to_string()
        );
    }
}

#[test]
fn test_get_override_ignores_home() {
    let env = TestEnv::new().with("XDG_CONFIG_HOME", "/opt/cfg");

    env.cmd()
        .args(["get", "config-home"])
        .assert()
        .success()
        .stdout("/opt/cfg\n");

    // Unrelated categories still use HOME
    let output = env.cmd().args(["get", "data-home"]).output().unwrap();
    assert_eq!(
        stdout_line(&output),
        env.under_home(".local/share").display().to_string()
    );
}

#[test]
fn test_get_override_is_verbatim() {
    TestEnv::new()
        .with("XDG_DATA_HOME", "/data/")
        .cmd()
        .args(["get", "data-home"])
        .assert()
        .success()
        .stdout("/data/\n");
}

#[cfg(unix)]
#[test]
fn test_get_non_utf8_override_prints_raw_bytes() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let raw = b"/tmp/\xff\xfe/data";
    let output = bare_cmd()
        .env("XDG_DATA_HOME", OsStr::from_bytes(raw))
        .args(["get", "data-home"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, b"/tmp/\xff\xfe/data\n");
}

#[test]
fn test_get_empty_override_uses_default() {
    let env = TestEnv::new().with("XDG_STATE_HOME", "");
    let output = env.cmd().args(["get", "state-home"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_line(&output),
        env.under_home(".local/state").display().to_string()
    );
}

#[test]
fn test_get_accepts_variable_name() {
    TestEnv::new()
        .with("XDG_CACHE_HOME", "/var/cache/me")
        .cmd()
        .args(["get", "XDG_CACHE_HOME"])
        .assert()
        .success()
        .stdout("/var/cache/me\n");
}

#[test]
fn test_get_missing_home() {
    bare_cmd()
        .args(["get", "data-home"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "XDG_DATA_HOME is not set and HOME is not set",
        ));
}

#[test]
fn test_get_override_without_home() {
    bare_cmd()
        .env("XDG_BIN_HOME", "/opt/bin")
        .args(["get", "bin-home"])
        .assert()
        .success()
        .stdout("/opt/bin\n");
}

#[test]
fn test_get_runtime_dir_unset() {
    TestEnv::new()
        .cmd()
        .args(["get", "runtime-dir"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("XDG_RUNTIME_DIR is not set"))
        .stderr(predicate::str::contains("no default"));
}

#[test]
fn test_get_runtime_dir_set() {
    TestEnv::new()
        .with("XDG_RUNTIME_DIR", "/run/user/1000")
        .cmd()
        .args(["get", "runtime-dir"])
        .assert()
        .success()
        .stdout("/run/user/1000\n");
}

#[test]
fn test_get_repeated_calls_agree() {
    let env = TestEnv::new();
    let first = env.cmd().args(["get", "cache-home"]).output().unwrap();
    let second = env.cmd().args(["get", "cache-home"]).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_get_json() {
    let env = TestEnv::new().with("XDG_CONFIG_HOME", "/opt/cfg");
    let output = env
        .cmd()
        .args(["get", "config-home", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["category"], "config-home");
    assert_eq!(json["variable"], "XDG_CONFIG_HOME");
    assert_eq!(json["path"], "/opt/cfg");
}

#[test]
fn test_get_verbose_trace() {
    let env = TestEnv::new().with("XDG_CONFIG_HOME", "/opt/cfg");

    env.cmd()
        .args(["--verbose", "--no-color", "get", "data-home"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "data-home: XDG_DATA_HOME unset, using $HOME/.local/share",
        ));

    env.cmd()
        .args(["get", "config-home", "-v"])
        .assert()
        .success()
        .stdout("/opt/cfg\n")
        .stderr(predicate::str::contains("XDG_CONFIG_HOME is set"));
}

#[test]
fn test_get_quiet_without_verbose() {
    TestEnv::new()
        .cmd()
        .args(["get", "data-home"])
        .assert()
        .success()
        .stderr("");
}

#[test]
fn test_get_platform_home() {
    // Without HOME the answer depends on the host's user database.
    let output = bare_cmd()
        .args(["--platform-home", "get", "data-home"])
        .output()
        .unwrap();

    if output.status.success() {
        assert!(stdout_line(&output).ends_with("/.local/share"));
    } else {
        assert_eq!(output.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&output.stderr).contains("HOME is not set"));
    }
}

#[test]
fn test_get_platform_home_prefers_home() {
    let env = TestEnv::new();
    let output = env
        .cmd()
        .args(["--platform-home", "get", "config-home"])
        .output()
        .unwrap();
    assert_eq!(
        stdout_line(&output),
        env.under_home(".config").display().to_string()
    );
}
