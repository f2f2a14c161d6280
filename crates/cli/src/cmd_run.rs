// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run, pre-commit and commit-msg command implementation.

use std::path::{Path, PathBuf};

use sluice::cli::{Cli, CommitMsgArgs, HookArgs, OutputFormat, RunArgs};
use sluice::color::resolve_color;
use sluice::config::{self, Config};
use sluice::context::TaskContext;
use sluice::discovery;
use sluice::error::{Error, ExitCode};
use sluice::files::FileCollection;
use sluice::git;
use sluice::output::FormatOptions;
use sluice::output::json::{self, JsonFormatter};
use sluice::output::text::TextFormatter;
use sluice::process::ProcessRunner;
use sluice::runner::{RunnerConfig, TaskRunner};
use sluice::task;

/// Which hook or command is driving the tasks.
pub enum Invocation<'a> {
    Run(&'a RunArgs),
    PreCommit(&'a HookArgs),
    CommitMsg(&'a CommitMsgArgs),
}

impl Invocation<'_> {
    fn common(&self) -> &HookArgs {
        match self {
            Invocation::Run(args) => &args.common,
            Invocation::PreCommit(args) => args,
            Invocation::CommitMsg(args) => &args.common,
        }
    }
}

/// Run the enabled tasks for one invocation.
pub fn run(cli: &Cli, invocation: Invocation) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    let config_path = discovery::resolve_config(cli.config.as_deref(), &cwd)?;
    let config = match &config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load(path)?
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Config::default()
        }
    };
    let root = discovery::project_root(config_path.as_deref(), &cwd);

    let common = invocation.common();
    for name in &common.tasks {
        if !config.tasks.iter().any(|t| t.name() == name) {
            return Err(Error::Argument(format!("unknown or disabled task `{name}`")).into());
        }
    }

    let ctx = build_context(&invocation, &root, &cwd)?;
    let process = ProcessRunner::new(&root, config.bin_dir.as_deref());
    let tasks = task::build_tasks(&config.tasks, &process);

    let runner = TaskRunner::new(RunnerConfig {
        only: (!common.tasks.is_empty()).then(|| common.tasks.clone()),
    });
    let results = runner.run(&tasks, &ctx)?;
    let output = json::create_output(ctx.kind(), results);

    match common.output {
        OutputFormat::Text => {
            let options = FormatOptions {
                verbose: common.verbose,
            };
            TextFormatter::stdout(resolve_color(), options).write(&output)?;
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout()).write(&output)?;
        }
    }

    Ok(if output.passed {
        ExitCode::Success
    } else {
        ExitCode::TaskFailed
    })
}

fn build_context(
    invocation: &Invocation,
    root: &Path,
    cwd: &Path,
) -> sluice::Result<TaskContext> {
    match invocation {
        Invocation::Run(args) if args.paths.is_empty() => {
            if !git::is_git_repo(root) {
                return Err(Error::Argument(
                    "no paths given and not inside a git repository".to_string(),
                ));
            }
            let files = git::get_tracked_files(root)?;
            Ok(TaskContext::Run(files.into_iter().collect()))
        }
        Invocation::Run(args) => {
            let files: FileCollection = args
                .paths
                .iter()
                .map(|p| relative_to_root(p, root, cwd))
                .collect();
            Ok(TaskContext::Run(files))
        }
        Invocation::PreCommit(_) => {
            if !git::is_git_repo(root) {
                return Err(Error::Argument(
                    "pre-commit must run inside a git repository".to_string(),
                ));
            }
            let files = git::get_staged_files(root)?;
            Ok(TaskContext::PreCommit(files.into_iter().collect()))
        }
        Invocation::CommitMsg(args) => {
            let message_path = cwd.join(&args.message_file);
            let message = std::fs::read_to_string(&message_path).map_err(|source| Error::Io {
                path: message_path.clone(),
                source,
            })?;
            let files = if git::is_git_repo(root) {
                git::get_staged_files(root)?
            } else {
                Vec::new()
            };
            Ok(TaskContext::CommitMessage {
                files: files.into_iter().collect(),
                message,
            })
        }
    }
}

/// Rebase a path given on the command line onto the project root.
fn relative_to_root(path: &Path, root: &Path, cwd: &Path) -> PathBuf {
    if cwd == root && path.is_relative() {
        return path.to_path_buf();
    }
    let absolute = cwd.join(path);
    match absolute.strip_prefix(root) {
        Ok(relative) => relative.to_path_buf(),
        Err(_) => absolute,
    }
}
