// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use chrono::Utc;

use super::RunOutput;
use crate::context::ContextKind;
use crate::task::TaskResult;

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the complete JSON output.
    pub fn write(&mut self, output: &RunOutput) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(output).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

/// Build output stamped with the current time.
pub fn create_output(context: ContextKind, tasks: Vec<TaskResult>) -> RunOutput {
    let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    RunOutput::new(timestamp, context, tasks)
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
