// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod cli;
pub mod color;
pub mod config;
pub mod context;
pub mod discovery;
pub mod env;
pub mod error;
pub mod files;
pub mod formatter;
pub mod git;
pub mod output;
pub mod process;
pub mod runner;
pub mod task;

pub use cli::{Cli, Command, OutputFormat};
pub use config::{Config, PhanConfig, TaskConfig};
pub use context::{ContextKind, TaskContext};
pub use error::{Error, ExitCode, Result};
pub use files::{FileCollection, FileRecord};
pub use process::{ProcessArguments, ProcessOutput, ProcessRunner};
pub use runner::{RunnerConfig, TaskRunner};
pub use task::{PhanTask, Task, TaskResult, TaskStatus};
