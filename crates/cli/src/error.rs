// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// Sluice error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// A task option has the wrong type or is not part of the task's schema.
    #[error("invalid options for task `{task}`: {message}")]
    ConfigValidation { task: String, message: String },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// The external tool could not be started at all.
    #[error("failed to execute `{command}`: {source}")]
    Execution {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Repository could not be read.
    #[error("git error: {0}")]
    Git(String),

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type using sluice Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// All tasks passed or were skipped
    Success = 0,
    /// One or more tasks failed
    TaskFailed = 1,
    /// Configuration or argument error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
    /// An external tool could not be launched
    ExecutionError = 4,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } | Error::ConfigValidation { .. } | Error::Argument(_) => {
                ExitCode::ConfigError
            }
            Error::Execution { .. } => ExitCode::ExecutionError,
            Error::Io { .. } | Error::Git(_) | Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
