// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// A pre-commit and CI quality-check runner that drives external linters
#[derive(Parser)]
#[command(name = "sluice")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "SLUICE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run tasks on the given files (default: all tracked files)
    Run(RunArgs),
    /// Run tasks on staged files (git pre-commit hook)
    #[command(name = "pre-commit")]
    PreCommit(HookArgs),
    /// Run tasks for a commit message (git commit-msg hook)
    #[command(name = "commit-msg")]
    CommitMsg(CommitMsgArgs),
    /// List available tasks and their options
    Tasks,
}

#[derive(clap::Args, Default)]
pub struct RunArgs {
    /// Files to run tasks on
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub common: HookArgs,
}

#[derive(clap::Args, Default)]
pub struct HookArgs {
    /// Only run these tasks (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "TASKS")]
    pub tasks: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Also report passed and skipped tasks
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(clap::Args)]
pub struct CommitMsgArgs {
    /// File holding the commit message (e.g. .git/COMMIT_EDITMSG)
    #[arg(value_name = "FILE")]
    pub message_file: PathBuf,

    #[command(flatten)]
    pub common: HookArgs,
}

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
