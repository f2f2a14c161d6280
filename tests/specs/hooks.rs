//! Behavioral specs for git hook contexts.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[cfg(unix)]
#[test]
fn pre_commit_analyzes_staged_files_only() {
    let project = Project::with_phan("diff_only = true\n");
    project.git_init();
    project.stub_phan("exit 0");
    project.file("README.md", "# readme\n");
    project.git(&["add", "README.md", "sluice.toml"]);
    project.git(&["commit", "-q", "-m", "initial"]);

    project.file("src/staged.php", "<?php\n");
    project.file("src/unstaged.php", "<?php\n");
    project.git(&["add", "src/staged.php"]);

    project.cmd().arg("pre-commit").assert().success();

    let calls = project.phan_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].last().unwrap(), "src/staged.php");
}

#[cfg(unix)]
#[test]
fn pre_commit_with_no_staged_php_skips() {
    let project = Project::with_phan("");
    project.git_init();
    project.stub_phan("exit 1");
    project.file("docs.md", "docs\n");
    project.git(&["add", "docs.md"]);

    project.cmd().arg("pre-commit").assert().success();
    assert!(project.phan_calls().is_empty());
}

#[cfg(unix)]
#[test]
fn run_without_paths_uses_tracked_files() {
    let project = Project::with_phan("diff_only = true\n");
    project.git_init();
    project.stub_phan("exit 0");
    project.file("a.php", "<?php\n");
    project.file("untracked.php", "<?php\n");
    project.git(&["add", "a.php"]);

    project.cmd().arg("run").assert().success();

    let calls = project.phan_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].last().unwrap(), "a.php");
}

#[cfg(unix)]
#[test]
fn commit_msg_does_not_run_phan() {
    let project = Project::with_phan("");
    project.git_init();
    project.stub_phan("exit 1");
    project.file("a.php", "<?php\n");
    project.git(&["add", "a.php"]);
    project.file("MSG", "feat: add a\n");

    project
        .cmd()
        .args(["commit-msg", "MSG"])
        .assert()
        .success()
        .stdout(predicates::str::contains("no tasks to run in commit-msg context"));
    assert!(project.phan_calls().is_empty());
}

#[test]
fn commit_msg_missing_file_is_error() {
    let project = Project::with_phan("");
    project
        .cmd()
        .args(["commit-msg", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("does-not-exist"));
}

#[test]
fn pre_commit_outside_git_is_argument_error() {
    let project = Project::with_phan("");
    project
        .cmd()
        .arg("pre-commit")
        .env("GIT_CEILING_DIRECTORIES", project.path().parent().unwrap())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("inside a git repository"));
}

#[cfg(unix)]
#[test]
fn pre_commit_with_nested_config_ignores_sibling_files() {
    let project = Project::with_config("version = 1\n[tasks]\n");
    project.git_init();
    project.file(
        "app/sluice.toml",
        "version = 1\nbin_dir = \"../bin\"\n[tasks.phan]\ndiff_only = true\n",
    );
    project.stub_phan("exit 0");
    project.file("app/src/Foo.php", "<?php\n");
    project.file("other/Bar.php", "<?php\n");
    project.git(&["add", "app/src/Foo.php", "other/Bar.php"]);

    project
        .cmd()
        .current_dir(project.path().join("app"))
        .arg("pre-commit")
        .assert()
        .success();

    let calls = project.phan_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].last().unwrap(), "src/Foo.php");
}
