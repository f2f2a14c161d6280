// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Task abstraction and result types.
//!
//! A task is one pluggable quality-check unit. The runner asks each task
//! whether it applies to the current context, then runs it and collects a
//! [`TaskResult`].

mod phan;

pub use phan::PhanTask;

use std::sync::Arc;

use serde::Serialize;

use crate::config::{ConfigSchema, TaskConfig};
use crate::context::{ContextKind, TaskContext};
use crate::error::Result;
use crate::formatter::ProcessFormatter;
use crate::process::ProcessRunner;

/// A single quality check driven by the runner.
///
/// Object-safe to allow dynamic dispatch via `Arc<dyn Task>`.
pub trait Task: Send + Sync {
    /// Unique identifier, matching the `[tasks.<name>]` config table.
    fn name(&self) -> &'static str;

    /// Options this task accepts, with types and defaults.
    fn configurable_options(&self) -> ConfigSchema;

    /// Whether the task may execute in `ctx` at all.
    fn can_run_in_context(&self, ctx: &TaskContext) -> bool;

    /// Run the task.
    ///
    /// A tool reporting problems is `Ok` with a failed result. `Err` is
    /// reserved for environment problems such as a tool that cannot be
    /// launched.
    fn run(&self, ctx: &TaskContext) -> Result<TaskResult>;
}

/// Outcome of one task invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TaskStatus {
    /// Nothing in scope for this task.
    Skipped,
    Passed,
    Failed { message: String },
}

/// Result of running a single task in a context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskResult {
    /// Task identifier (e.g., "phan").
    pub task: String,

    /// Context the task ran in.
    pub context: ContextKind,

    #[serde(flatten)]
    pub status: TaskStatus,
}

impl TaskResult {
    pub fn skipped(task: &dyn Task, ctx: &TaskContext) -> Self {
        Self::new(task, ctx, TaskStatus::Skipped)
    }

    pub fn passed(task: &dyn Task, ctx: &TaskContext) -> Self {
        Self::new(task, ctx, TaskStatus::Passed)
    }

    pub fn failed(task: &dyn Task, ctx: &TaskContext, message: impl Into<String>) -> Self {
        Self::new(
            task,
            ctx,
            TaskStatus::Failed {
                message: message.into(),
            },
        )
    }

    fn new(task: &dyn Task, ctx: &TaskContext, status: TaskStatus) -> Self {
        Self {
            task: task.name().to_string(),
            context: ctx.kind(),
            status,
        }
    }

    pub fn is_passed(&self) -> bool {
        self.status == TaskStatus::Passed
    }

    pub fn is_skipped(&self) -> bool {
        self.status == TaskStatus::Skipped
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, TaskStatus::Failed { .. })
    }

    /// Failure message, if the task failed.
    pub fn message(&self) -> Option<&str> {
        match &self.status {
            TaskStatus::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// Build the enabled tasks from resolved configuration.
pub fn build_tasks(configs: &[TaskConfig], process: &ProcessRunner) -> Vec<Arc<dyn Task>> {
    configs
        .iter()
        .map(|config| -> Arc<dyn Task> {
            match config {
                TaskConfig::Phan(phan) => Arc::new(PhanTask::new(
                    phan.clone(),
                    process.clone(),
                    Arc::new(ProcessFormatter),
                )),
            }
        })
        .collect()
}

/// Option schemas for every known task, for listing.
pub fn all_schemas() -> Vec<(&'static str, ConfigSchema)> {
    vec![(PhanTask::NAME, PhanTask::options())]
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
