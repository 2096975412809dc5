#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Runs in an empty directory with a private config home, so neither a local
/// `talentdesk.toml` nor a user-wide config leaks into the test.
fn talentdesk_cmd(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("talentdesk"));
    cmd.current_dir(temp.path())
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join("config"))
        .env("TALENTDESK_API_BASE", "http://127.0.0.1:9")
        .env_remove("TALENTDESK_LOG_FILTER")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_one_shot_dashboard() {
    let temp = TempDir::new().unwrap();
    talentdesk_cmd(&temp)
        .args(["dashboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dashboard"))
        .stdout(predicate::str::contains("Assignments"));
}

#[test]
fn test_session_keeps_state_between_lines() {
    let temp = TempDir::new().unwrap();
    talentdesk_cmd(&temp)
        .write_stdin(
            "templates assign TPL001 10\n\
             # comments and blank lines are skipped\n\
             \n\
             notifications list\n\
             quit\n\
             dashboard\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Assigned template 'Basketball Assessment Battery' (+10)",
        ))
        // Anything after quit is never read.
        .stdout(predicate::str::contains("Dashboard").not());
}

#[test]
fn test_missing_id_is_a_warning_not_a_failure() {
    let temp = TempDir::new().unwrap();
    talentdesk_cmd(&temp)
        .args(["templates", "delete", "NOPE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No template with id 'NOPE'"));
}

#[test]
fn test_validation_error_exits_nonzero() {
    let temp = TempDir::new().unwrap();
    talentdesk_cmd(&temp)
        .args("players add Asha --age 3 --location Pune --sport Athletics".split_whitespace())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_session_survives_bad_lines() {
    let temp = TempDir::new().unwrap();
    talentdesk_cmd(&temp)
        .write_stdin(
            "templates frobnicate\n\
             players add Asha --age 3 --location Pune --sport Athletics\n\
             candidates advance ATH001\n",
        )
        .assert()
        .success()
        .stderr(predicate::str::contains("frobnicate"))
        .stderr(predicate::str::contains("Error:"))
        .stdout(predicate::str::contains("Interview"));
}

#[test]
fn test_json_output() {
    let temp = TempDir::new().unwrap();
    let output = talentdesk_cmd(&temp)
        .args(["--json", "dashboard"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value["totalTemplates"].as_u64().unwrap() > 0);
    assert_eq!(value["unreadNotifications"], 0);
}

#[test]
fn test_navigation_falls_back_to_dashboard() {
    let temp = TempDir::new().unwrap();
    talentdesk_cmd(&temp)
        .write_stdin("nav go nowhere\nnav toggle players\nnav show\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown section 'nowhere'"))
        .stdout(predicate::str::contains("players"));
}

#[test]
fn test_remote_templates_fall_back_when_service_is_down() {
    let temp = TempDir::new().unwrap();
    talentdesk_cmd(&temp)
        .args(["remote", "templates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TEMPLATE-001"));
}

#[test]
fn test_local_config_file_is_picked_up() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("talentdesk.toml"),
        "api_base = \"http://127.0.0.1:9/\"\nlog_filter = \"debug\"\n",
    )
    .unwrap();

    talentdesk_cmd(&temp)
        .env_remove("TALENTDESK_API_BASE")
        .args(["dashboard"])
        .assert()
        .success()
        .stderr(predicate::str::contains("configuration loaded"))
        .stderr(predicate::str::contains("http://127.0.0.1:9"));
}
