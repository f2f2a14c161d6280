// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parallel task runner with error isolation.
//!
//! Runs every task that applies to the context in parallel using rayon.
//! A task reporting problems never stops the others. A task that cannot be
//! executed at all (e.g. missing binary) turns the whole run into an error.

use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;

use crate::context::TaskContext;
use crate::error::{Error, Result};
use crate::task::{Task, TaskResult};

/// Configuration for the task runner.
#[derive(Debug, Clone, Default)]
pub struct RunnerConfig {
    /// Only run tasks with these names (None = all enabled tasks).
    pub only: Option<Vec<String>>,
}

/// The task runner executes tasks for one context.
pub struct TaskRunner {
    config: RunnerConfig,
}

impl TaskRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Tasks selected by name and applicable to `ctx`, in their original order.
    pub fn applicable<'a>(
        &self,
        tasks: &'a [Arc<dyn Task>],
        ctx: &TaskContext,
    ) -> Vec<&'a Arc<dyn Task>> {
        tasks
            .iter()
            .filter(|task| match &self.config.only {
                Some(names) => names.iter().any(|n| n == task.name()),
                None => true,
            })
            .filter(|task| {
                let applies = task.can_run_in_context(ctx);
                if !applies {
                    tracing::debug!("{}: not applicable in {} context", task.name(), ctx.kind());
                }
                applies
            })
            .collect()
    }

    /// Run all applicable tasks and return their results in task order.
    pub fn run(&self, tasks: &[Arc<dyn Task>], ctx: &TaskContext) -> Result<Vec<TaskResult>> {
        let selected = self.applicable(tasks, ctx);
        tracing::debug!(
            "running {} task(s) on {} file(s) in {} context",
            selected.len(),
            ctx.files().len(),
            ctx.kind()
        );

        selected
            .into_par_iter()
            .map(|task| {
                let start = Instant::now();
                let result =
                    std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| task.run(ctx)))
                        .unwrap_or_else(|_| {
                            Err(Error::Internal(format!("task `{}` panicked", task.name())))
                        });
                tracing::debug!("{}: finished in {:?}", task.name(), start.elapsed());
                result
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
