// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! External process construction and execution.
//!
//! Commands are built as a binary name plus a flat argument vector. Flags and
//! their values are always separate argv elements; nothing goes through a
//! shell. Output is captured, never streamed.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Argument list for a single external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessArguments {
    command: String,
    args: Vec<String>,
}

impl ProcessArguments {
    /// Start an argument list for the named binary.
    pub fn for_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Add `flag value` as two elements, or nothing when the value is absent or empty.
    pub fn add_optional_argument_with_separated_value(&mut self, flag: &str, value: Option<&str>) {
        match value {
            Some(value) if !value.is_empty() => {
                self.args.push(flag.to_string());
                self.args.push(value.to_string());
            }
            _ => {}
        }
    }
}

impl std::fmt::Display for ProcessArguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.command)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Captured result of a finished process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code (None when terminated by a signal).
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn is_successful(&self) -> bool {
        self.code == Some(0)
    }
}

/// Resolves and runs external commands for a project.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    working_dir: PathBuf,
    bin_dir: Option<PathBuf>,
}

impl ProcessRunner {
    /// Runner executing in `working_dir`.
    ///
    /// A relative `bin_dir` is resolved against `working_dir`.
    pub fn new(working_dir: impl Into<PathBuf>, bin_dir: Option<&Path>) -> Self {
        let working_dir = working_dir.into();
        let bin_dir = bin_dir.map(|dir| {
            if dir.is_absolute() {
                dir.to_path_buf()
            } else {
                working_dir.join(dir)
            }
        });
        Self {
            working_dir,
            bin_dir,
        }
    }

    /// Locate an executable, preferring `bin_dir` over `PATH`.
    pub fn find_executable(&self, command: &str) -> PathBuf {
        if let Some(dir) = &self.bin_dir {
            for name in executable_names(command) {
                let candidate = dir.join(&name);
                if candidate.is_file() {
                    return candidate;
                }
            }
        }
        PathBuf::from(command)
    }

    /// Run the command to completion, capturing stdout and stderr.
    ///
    /// A command that exits non-zero is still `Ok`; only a failure to launch
    /// it is an error.
    pub fn run(&self, arguments: &ProcessArguments) -> Result<ProcessOutput> {
        let program = self.find_executable(arguments.command());
        tracing::debug!("running {} ({})", arguments, program.display());

        let output = Command::new(&program)
            .args(arguments.args())
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| Error::Execution {
                command: arguments.command().to_string(),
                source,
            })?;

        let result = ProcessOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        tracing::debug!("{} exited with {:?}", arguments.command(), result.code);
        Ok(result)
    }
}

/// File names an executable may have on this platform.
fn executable_names(command: &str) -> Vec<String> {
    if cfg!(target_os = "windows") {
        vec![
            command.to_string(),
            format!("{command}.exe"),
            format!("{command}.bat"),
            format!("{command}.cmd"),
        ]
    } else {
        vec![command.to_string()]
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
