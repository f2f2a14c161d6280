// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Failure messages for external process results.

use crate::process::ProcessOutput;

/// Turns a failed process run into a human-readable message.
pub trait ResultFormatter: Send + Sync {
    fn format(&self, output: &ProcessOutput) -> String;
}

/// Default formatter: the tool's stdout followed by its stderr.
///
/// Falls back to the exit status when the tool printed nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessFormatter;

impl ResultFormatter for ProcessFormatter {
    fn format(&self, output: &ProcessOutput) -> String {
        let stdout = output.stdout.trim();
        let stderr = output.stderr.trim();

        let message = match (stdout.is_empty(), stderr.is_empty()) {
            (false, false) => format!("{stdout}\n{stderr}"),
            (false, true) => stdout.to_string(),
            (true, false) => stderr.to_string(),
            (true, true) => String::new(),
        };

        if message.is_empty() {
            match output.code {
                Some(code) => format!("command failed with exit code {code}"),
                None => "command terminated by signal".to_string(),
            }
        } else {
            message
        }
    }
}

#[cfg(test)]
#[path = "formatter_tests.rs"]
mod tests;
