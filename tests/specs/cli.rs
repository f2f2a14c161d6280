//! Behavioral specs for the command surface.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// Bare invocation shows help
#[test]
fn bare_invocation_shows_help() {
    sluice_cmd()
        .assert()
        .success()
        .stdout(predicates::str::contains("Usage:"));
}

#[test]
fn help_lists_hook_commands() {
    sluice_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("pre-commit"))
        .stdout(predicates::str::contains("commit-msg"));
}

#[test]
fn version_exits_successfully() {
    sluice_cmd().arg("--version").assert().success();
}

#[test]
fn tasks_lists_phan_options_with_defaults() {
    sluice_cmd()
        .arg("tasks")
        .assert()
        .success()
        .stdout(predicates::str::contains("phan"))
        .stdout(predicates::str::contains("triggered_by"))
        .stdout(predicates::str::contains(r#"(default: ".phan/config.php")"#))
        .stdout(predicates::str::contains("diff_only"));
}

#[test]
fn unknown_task_filter_is_argument_error() {
    let project = Project::with_phan("");
    project
        .cmd()
        .args(["run", "--tasks", "psalm", "a.php"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unknown or disabled task `psalm`"));
}

#[test]
fn run_without_paths_outside_git_is_argument_error() {
    let project = Project::with_phan("");
    project
        .cmd()
        .arg("run")
        .env("GIT_CEILING_DIRECTORIES", project.path().parent().unwrap())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("not inside a git repository"));
}
