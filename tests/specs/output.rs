//! Behavioral specs for output formats.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[cfg(unix)]
#[test]
fn json_output_for_failure() {
    let project = Project::with_phan("");
    project.stub_phan("echo 'issue found'; exit 1");

    let output = project
        .cmd()
        .args(["run", "-o", "json", "a.php"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["context"], "run");
    assert_eq!(json["passed"], false);
    assert_eq!(json["tasks"][0]["task"], "phan");
    assert_eq!(json["tasks"][0]["status"], "failed");
    assert_eq!(json["tasks"][0]["message"], "issue found");
    assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn json_output_for_skip() {
    let project = Project::with_phan("");

    let output = project
        .cmd()
        .args(["run", "-o", "json", "style.css"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["passed"], true);
    assert_eq!(json["tasks"][0]["status"], "skipped");
    assert!(json["tasks"][0].get("message").is_none());
}

#[cfg(unix)]
#[test]
fn no_color_env_disables_escape_codes() {
    let project = Project::with_phan("");
    project.stub_phan("echo bad; exit 1");

    project
        .cmd()
        .env("NO_COLOR", "1")
        .env("COLOR", "1")
        .args(["run", "a.php"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("\x1b[").not());
}

#[cfg(unix)]
#[test]
fn color_env_forces_escape_codes() {
    let project = Project::with_phan("");
    project.stub_phan("echo bad; exit 1");

    project
        .cmd()
        .env_remove("NO_COLOR")
        .env("COLOR", "1")
        .args(["run", "a.php"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("\x1b["));
}
