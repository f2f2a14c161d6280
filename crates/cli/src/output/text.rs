// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! ```text
//! <task-name>: FAIL
//!   <tool output, indented>
//! <task-name>: SKIP no matching files
//! ```
//! Passed tasks are silent unless verbose.

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use super::{FormatOptions, RunOutput};
use crate::color::scheme;
use crate::task::{TaskResult, TaskStatus};

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
    options: FormatOptions,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice, options: FormatOptions) -> Self {
        Self::new(StandardStream::stdout(color_choice), options)
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W, options: FormatOptions) -> Self {
        Self { out, options }
    }

    /// Write a single task result.
    pub fn write_result(&mut self, result: &TaskResult) -> std::io::Result<()> {
        match &result.status {
            TaskStatus::Failed { message } => {
                self.write_header(&result.task, "FAIL", &scheme::fail())?;
                writeln!(self.out)?;
                for line in message.lines() {
                    if line.is_empty() {
                        writeln!(self.out)?;
                    } else {
                        writeln!(self.out, "  {}", line)?;
                    }
                }
            }
            TaskStatus::Skipped if self.options.verbose => {
                self.write_header(&result.task, "SKIP", &scheme::skip())?;
                writeln!(self.out, " no matching files")?;
            }
            TaskStatus::Passed if self.options.verbose => {
                self.write_header(&result.task, "PASS", &scheme::pass())?;
                writeln!(self.out)?;
            }
            TaskStatus::Skipped | TaskStatus::Passed => {}
        }
        Ok(())
    }

    fn write_header(&mut self, task: &str, label: &str, color: &ColorSpec) -> std::io::Result<()> {
        self.out.set_color(&scheme::task_name())?;
        write!(self.out, "{}", task)?;
        self.out.reset()?;
        write!(self.out, ": ")?;
        self.out.set_color(color)?;
        write!(self.out, "{}", label)?;
        self.out.reset()
    }

    /// Write the summary line.
    pub fn write_summary(&mut self, output: &RunOutput) -> std::io::Result<()> {
        if output.tasks.is_empty() {
            return writeln!(self.out, "no tasks to run in {} context", output.context);
        }

        let passed = output.count_passed();
        let mut summary = format!(
            "{} task{} passed",
            passed,
            if passed == 1 { "" } else { "s" }
        );
        let failed = output.count_failed();
        if failed > 0 {
            summary.push_str(&format!(", {} failed", failed));
        }
        let skipped = output.count_skipped();
        if skipped > 0 {
            summary.push_str(&format!(", {} skipped", skipped));
        }
        writeln!(self.out, "{}", summary)
    }

    /// Write every result followed by the summary.
    pub fn write(&mut self, output: &RunOutput) -> std::io::Result<()> {
        for result in &output.tasks {
            self.write_result(result)?;
        }
        self.write_summary(output)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
