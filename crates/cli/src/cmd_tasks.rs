// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tasks command: list known tasks and their options.

use sluice::cli::Cli;
use sluice::error::ExitCode;
use sluice::task;

pub fn run(_cli: &Cli) -> anyhow::Result<ExitCode> {
    for (name, schema) in task::all_schemas() {
        println!("{}", name);
        let width = schema.iter().map(|o| o.name.len()).max().unwrap_or(0);
        for option in schema.iter() {
            let default = match &option.default {
                Some(value) => format!(" (default: {})", value),
                None => String::new(),
            };
            println!(
                "  {:width$}  {:9} {}{}",
                option.name,
                option.kind.to_string(),
                option.description,
                default,
                width = width
            );
        }
    }
    Ok(ExitCode::Success)
}
