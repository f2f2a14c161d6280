// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for task results.

pub mod json;
pub mod text;

use serde::Serialize;

use crate::context::ContextKind;
use crate::task::TaskResult;

/// Output formatting options.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Also report passed and skipped tasks.
    pub verbose: bool,
}

/// Aggregated results of one runner invocation.
#[derive(Debug, Clone, Serialize)]
pub struct RunOutput {
    /// ISO 8601 timestamp.
    pub timestamp: String,

    /// Context the tasks ran in.
    pub context: ContextKind,

    /// Whether no task failed.
    pub passed: bool,

    /// Results for each task that ran.
    pub tasks: Vec<TaskResult>,
}

impl RunOutput {
    pub fn new(timestamp: String, context: ContextKind, tasks: Vec<TaskResult>) -> Self {
        let passed = !tasks.iter().any(TaskResult::is_failed);
        Self {
            timestamp,
            context,
            passed,
            tasks,
        }
    }

    pub fn count_passed(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_passed()).count()
    }

    pub fn count_failed(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_failed()).count()
    }

    pub fn count_skipped(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_skipped()).count()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
