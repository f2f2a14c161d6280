// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Phan static analyzer task.
//!
//! Runs `phan` when files with a triggering extension are in scope.

use std::sync::Arc;

use super::{Task, TaskResult};
use crate::config::{ConfigSchema, PhanConfig};
use crate::context::TaskContext;
use crate::error::Result;
use crate::files::FileCollection;
use crate::formatter::ResultFormatter;
use crate::process::{ProcessArguments, ProcessRunner};

/// Adapter running the `phan` binary.
pub struct PhanTask {
    config: PhanConfig,
    process: ProcessRunner,
    formatter: Arc<dyn ResultFormatter>,
}

impl PhanTask {
    pub const NAME: &'static str = "phan";

    pub fn new(
        config: PhanConfig,
        process: ProcessRunner,
        formatter: Arc<dyn ResultFormatter>,
    ) -> Self {
        Self {
            config,
            process,
            formatter,
        }
    }

    /// Declared options, available without an instance.
    pub fn options() -> ConfigSchema {
        PhanConfig::schema()
    }

    /// Files in scope whose extension triggers the task.
    pub fn select_files(&self, files: &FileCollection) -> FileCollection {
        files.extensions(self.config.triggered_by.as_slice())
    }

    /// Command line for analyzing `files`.
    pub fn build_arguments(&self, files: &FileCollection) -> ProcessArguments {
        let mut arguments = ProcessArguments::for_command(Self::NAME);
        arguments.add_optional_argument_with_separated_value(
            "--config-file",
            Some(self.config.config_file.as_str()),
        );
        arguments.add_optional_argument_with_separated_value(
            "--output-mode",
            Some(self.config.output_mode.as_str()),
        );
        arguments
            .add_optional_argument_with_separated_value("--output", self.config.output.as_deref());

        if self.config.diff_only {
            arguments.add_optional_argument_with_separated_value(
                "--include-analysis-file-list",
                Some(files.join_paths(",").as_str()),
            );
        }

        arguments
    }
}

impl Task for PhanTask {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn configurable_options(&self) -> ConfigSchema {
        Self::options()
    }

    fn can_run_in_context(&self, ctx: &TaskContext) -> bool {
        match ctx {
            TaskContext::PreCommit(_) | TaskContext::Run(_) => true,
            TaskContext::CommitMessage { .. } => false,
        }
    }

    fn run(&self, ctx: &TaskContext) -> Result<TaskResult> {
        let files = self.select_files(ctx.files());
        if files.is_empty() {
            tracing::debug!(
                "phan: no files matching {:?}, skipping",
                self.config.triggered_by
            );
            return Ok(TaskResult::skipped(self, ctx));
        }

        let arguments = self.build_arguments(&files);
        tracing::info!("phan: analyzing {} file(s)", files.len());

        let output = self.process.run(&arguments)?;
        if !output.is_successful() {
            return Ok(TaskResult::failed(self, ctx, self.formatter.format(&output)));
        }

        Ok(TaskResult::passed(self, ctx))
    }
}

#[cfg(test)]
#[path = "phan_tests.rs"]
mod tests;
