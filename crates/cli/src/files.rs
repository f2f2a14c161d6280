// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File records handed to tasks by a context.
//!
//! Paths are kept exactly as the context produced them (usually relative to
//! the project root) so they can be forwarded to external tools unchanged.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// A single file in scope for a task invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    path: PathBuf,
}

impl FileRecord {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file name ends in `.<extension>`, ignoring ASCII case.
    ///
    /// Multi-part extensions such as `blade.php` are matched as a suffix.
    pub fn has_extension(&self, extension: &str) -> bool {
        let extension = extension.trim_start_matches('.');
        if extension.is_empty() {
            return false;
        }
        let Some(name) = self.path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        let suffix_len = extension.len() + 1;
        if name.len() < suffix_len {
            return false;
        }
        let split = name.len() - suffix_len;
        if !name.is_char_boundary(split) {
            return false;
        }
        let suffix = &name[split..];
        suffix.starts_with('.') && suffix[1..].eq_ignore_ascii_case(extension)
    }
}

/// Ordered set of files exposed by a context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FileCollection {
    files: Vec<FileRecord>,
}

impl FileCollection {
    pub fn new(files: Vec<FileRecord>) -> Self {
        Self { files }
    }

    /// Keep only files matching one of `extensions`, preserving order.
    pub fn extensions<S: AsRef<str>>(&self, extensions: &[S]) -> FileCollection {
        let files = self
            .files
            .iter()
            .filter(|f| extensions.iter().any(|ext| f.has_extension(ext.as_ref())))
            .cloned()
            .collect();
        FileCollection { files }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileRecord> {
        self.files.iter()
    }

    /// Paths joined with `separator`, in collection order.
    pub fn join_paths(&self, separator: &str) -> String {
        self.files
            .iter()
            .map(|f| f.path.to_string_lossy())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for FileCollection {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().map(FileRecord::new).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FileCollection {
    type Item = &'a FileRecord;
    type IntoIter = std::slice::Iter<'a, FileRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

#[cfg(test)]
#[path = "files_tests.rs"]
mod tests;
