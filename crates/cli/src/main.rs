// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sluice CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use sluice::cli::{Cli, Command};
use sluice::error::ExitCode;

mod cmd_run;
mod cmd_tasks;

fn init_logging() {
    let filter = EnvFilter::try_from_env(sluice::env::SLUICE_LOG).unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("sluice: {}", e);
            match e.downcast_ref::<sluice::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Run(args)) => cmd_run::run(&cli, cmd_run::Invocation::Run(args)),
        Some(Command::PreCommit(args)) => {
            cmd_run::run(&cli, cmd_run::Invocation::PreCommit(args))
        }
        Some(Command::CommitMsg(args)) => {
            cmd_run::run(&cli, cmd_run::Invocation::CommitMsg(args))
        }
        Some(Command::Tasks) => cmd_tasks::run(&cli),
    }
}
