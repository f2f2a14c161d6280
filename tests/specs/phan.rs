//! Behavioral specs for the phan task.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[cfg(unix)]
#[test]
fn passing_phan_exits_zero() {
    let project = Project::with_phan("");
    project.stub_phan("exit 0");

    project
        .cmd()
        .args(["run", "src/a.php"])
        .assert()
        .success()
        .stdout(predicates::str::contains("1 task passed"));

    assert_eq!(
        project.phan_calls(),
        vec![vec![
            "--config-file",
            ".phan/config.php",
            "--output-mode",
            "text"
        ]]
    );
}

#[cfg(unix)]
#[test]
fn failing_phan_reports_its_output() {
    let project = Project::with_phan("");
    project.stub_phan("echo 'src/a.php:7 PhanUndeclaredMethod Call to undeclared method'; exit 1");

    project
        .cmd()
        .args(["run", "src/a.php"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("phan: FAIL"))
        .stdout(predicates::str::contains(
            "  src/a.php:7 PhanUndeclaredMethod Call to undeclared method",
        ));
}

#[cfg(unix)]
#[test]
fn no_php_files_skips_without_running_phan() {
    let project = Project::with_phan("");
    project.stub_phan("exit 1");

    project
        .cmd()
        .args(["run", "-v", "README.md", "app.js"])
        .assert()
        .success()
        .stdout(predicates::str::contains("phan: SKIP"));

    assert!(project.phan_calls().is_empty());
}

#[cfg(unix)]
#[test]
fn diff_only_passes_matching_files_in_order() {
    let project = Project::with_phan("diff_only = true\ntriggered_by = [\"php\", \"phtml\"]\n");
    project.stub_phan("exit 0");

    project
        .cmd()
        .args(["run", "b.php", "notes.md", "a.phtml", "c.PHP"])
        .assert()
        .success();

    let calls = project.phan_calls();
    assert_eq!(calls.len(), 1);
    let list: Vec<_> = calls[0]
        .iter()
        .filter(|a| *a == "--include-analysis-file-list")
        .collect();
    assert_eq!(list.len(), 1);
    assert_eq!(calls[0].last().unwrap(), "b.php,a.phtml,c.PHP");
}

#[cfg(unix)]
#[test]
fn output_option_is_forwarded() {
    let project = Project::with_phan("output = \"phan.txt\"\noutput_mode = \"checkstyle\"\n");
    project.stub_phan("exit 0");

    project.cmd().args(["run", "a.php"]).assert().success();

    assert_eq!(
        project.phan_calls(),
        vec![vec![
            "--config-file",
            ".phan/config.php",
            "--output-mode",
            "checkstyle",
            "--output",
            "phan.txt",
        ]]
    );
}

#[test]
fn missing_phan_binary_is_execution_error() {
    let project = Project::with_phan("");
    // Empty PATH so the fallback lookup cannot find a real phan either.
    project
        .cmd()
        .env("PATH", "")
        .args(["run", "a.php"])
        .assert()
        .code(4)
        .stderr(predicates::str::contains("failed to execute `phan`"));
}

#[test]
fn missing_phan_binary_is_irrelevant_when_skipped() {
    let project = Project::with_phan("");
    project
        .cmd()
        .env("PATH", "")
        .args(["run", "index.html"])
        .assert()
        .success()
        .stdout(predicates::str::contains("0 tasks passed, 1 skipped"));
}
