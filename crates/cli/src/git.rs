// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Git utilities for building file contexts.
//!
//! Uses git2 (libgit2) for all git operations to avoid subprocess overhead.
//! Returned paths are relative to the project root passed in, so they can be
//! handed to tools running in that directory. Files outside the root are
//! left out.

use std::path::{Path, PathBuf};

use git2::{Repository, RepositoryOpenFlags};

use crate::env;
use crate::error::{Error, Result};

fn git_error(context: &'static str) -> impl FnOnce(git2::Error) -> Error {
    move |e| Error::Git(format!("{context}: {}", e.message()))
}

/// Find the repository containing `root`, stopping at `GIT_CEILING_DIRECTORIES`.
fn discover(root: &Path) -> std::result::Result<Repository, git2::Error> {
    let ceilings: Vec<PathBuf> = std::env::var_os(env::GIT_CEILING_DIRECTORIES)
        .map(|dirs| std::env::split_paths(&dirs).collect())
        .unwrap_or_default();
    Repository::open_ext(root, RepositoryOpenFlags::empty(), ceilings.iter())
}

fn open(root: &Path) -> Result<Repository> {
    discover(root).map_err(git_error("failed to open repository"))
}

/// Check if a path is in a git repository.
pub fn is_git_repo(root: &Path) -> bool {
    discover(root).is_ok()
}

/// Resolves repository-relative paths to paths relative to the project root.
struct RootFilter {
    workdir: Option<PathBuf>,
    root: PathBuf,
}

impl RootFilter {
    fn new(repo: &Repository, root: &Path) -> Self {
        let workdir = repo
            .workdir()
            .map(|dir| dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf()));
        let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
        Self { workdir, root }
    }

    /// `path` relative to the root, or None when it lies outside the root.
    fn relative(&self, path: &Path) -> Option<PathBuf> {
        let Some(workdir) = &self.workdir else {
            return Some(path.to_path_buf());
        };
        workdir
            .join(path)
            .strip_prefix(&self.root)
            .ok()
            .map(Path::to_path_buf)
    }
}

/// Get files staged for commit (index vs HEAD), excluding deletions.
pub fn get_staged_files(root: &Path) -> Result<Vec<PathBuf>> {
    let repo = open(root)?;

    // Get HEAD tree (handle case of empty repo with no commits)
    let head_tree = match repo.head() {
        Ok(head) => Some(
            head.peel_to_tree()
                .map_err(git_error("failed to get HEAD tree"))?,
        ),
        Err(e) if e.code() == git2::ErrorCode::UnbornBranch => None,
        Err(e) => return Err(git_error("failed to get HEAD")(e)),
    };

    let index = repo
        .index()
        .map_err(git_error("failed to get repository index"))?;

    // Compare HEAD tree to index to find staged changes
    let diff = repo
        .diff_tree_to_index(head_tree.as_ref(), Some(&index), None)
        .map_err(git_error("failed to compute diff"))?;

    let filter = RootFilter::new(&repo, root);
    let mut files = Vec::new();
    for delta in diff.deltas() {
        // Deleted files no longer exist for a tool to analyze
        if delta.status() == git2::Delta::Deleted {
            continue;
        }
        if let Some(path) = delta.new_file().path().and_then(|p| filter.relative(p)) {
            files.push(path);
        }
    }

    tracing::debug!("found {} staged file(s)", files.len());
    Ok(files)
}

/// Get all files tracked in the index.
pub fn get_tracked_files(root: &Path) -> Result<Vec<PathBuf>> {
    let repo = open(root)?;
    let index = repo
        .index()
        .map_err(git_error("failed to get repository index"))?;

    let filter = RootFilter::new(&repo, root);
    let files: Vec<PathBuf> = index
        .iter()
        .filter_map(|entry| {
            let path = PathBuf::from(String::from_utf8_lossy(&entry.path).into_owned());
            filter.relative(&path)
        })
        .collect();

    tracing::debug!("found {} tracked file(s)", files.len());
    Ok(files)
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
