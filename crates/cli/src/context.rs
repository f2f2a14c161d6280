// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Execution contexts.
//!
//! A context says which files are in scope for one runner invocation and why.

use serde::Serialize;

use crate::files::FileCollection;

/// The situation a task is being asked to run in.
#[derive(Debug, Clone)]
pub enum TaskContext {
    /// Files staged in the git index (pre-commit hook).
    PreCommit(FileCollection),
    /// Files named on the command line, or all tracked files.
    Run(FileCollection),
    /// Commit message validation (commit-msg hook).
    CommitMessage {
        files: FileCollection,
        message: String,
    },
}

impl TaskContext {
    /// Files in scope for this invocation.
    pub fn files(&self) -> &FileCollection {
        match self {
            TaskContext::PreCommit(files) | TaskContext::Run(files) => files,
            TaskContext::CommitMessage { files, .. } => files,
        }
    }

    pub fn kind(&self) -> ContextKind {
        match self {
            TaskContext::PreCommit(_) => ContextKind::PreCommit,
            TaskContext::Run(_) => ContextKind::Run,
            TaskContext::CommitMessage { .. } => ContextKind::CommitMessage,
        }
    }
}

/// Tag identifying which context produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContextKind {
    PreCommit,
    Run,
    #[serde(rename = "commit-msg")]
    CommitMessage,
}

impl ContextKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ContextKind::PreCommit => "pre-commit",
            ContextKind::Run => "run",
            ContextKind::CommitMessage => "commit-msg",
        }
    }
}

impl std::fmt::Display for ContextKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
