//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Returns a Command configured to run the sluice binary
pub fn sluice_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sluice"));
    cmd.env_remove("SLUICE_CONFIG")
        .env_remove("SLUICE_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// A temporary project with a sluice.toml and a `bin/` dir for stub tools.
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// Project whose config enables phan with `bin_dir = "bin"` plus `phan_options`.
    pub fn with_phan(phan_options: &str) -> Self {
        Self::with_config(&format!(
            "version = 1\nbin_dir = \"bin\"\n\n[tasks.phan]\n{phan_options}"
        ))
    }

    pub fn with_config(config: &str) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("sluice.toml"), config).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn bin(&self) -> PathBuf {
        self.dir.path().join("bin")
    }

    /// Write a file relative to the project root.
    pub fn file(&self, path: &str, content: &str) -> &Self {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
        self
    }

    /// Install a stub `phan` that records its arguments and runs `body`.
    #[cfg(unix)]
    pub fn stub_phan(&self, body: &str) -> &Self {
        use std::os::unix::fs::PermissionsExt;

        let bin = self.bin();
        std::fs::create_dir_all(&bin).unwrap();
        let calls = bin.join("phan.calls");
        let script = format!(
            "#!/bin/sh\nfor arg in \"$@\"; do printf '%s\\n' \"$arg\" >> '{}'; done\necho -- >> '{}'\n{}\n",
            calls.display(),
            calls.display(),
            body
        );
        let path = bin.join("phan");
        std::fs::write(&path, script).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        self
    }

    /// Arguments of each recorded stub invocation.
    pub fn phan_calls(&self) -> Vec<Vec<String>> {
        let Ok(content) = std::fs::read_to_string(self.bin().join("phan.calls")) else {
            return Vec::new();
        };
        let mut calls = Vec::new();
        let mut current = Vec::new();
        for line in content.lines() {
            if line == "--" {
                calls.push(std::mem::take(&mut current));
            } else {
                current.push(line.to_string());
            }
        }
        calls
    }

    /// `sluice` command running in the project root.
    pub fn cmd(&self) -> Command {
        let mut cmd = sluice_cmd();
        cmd.current_dir(self.path());
        cmd
    }

    /// Initialize a git repository with a committer identity.
    pub fn git_init(&self) -> &Self {
        self.git(&["init", "-q"]);
        self.git(&["config", "user.email", "test@example.com"]);
        self.git(&["config", "user.name", "Test User"]);
        self.git(&["config", "commit.gpgsign", "false"]);
        self
    }

    pub fn git(&self, args: &[&str]) -> &Self {
        let status = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("failed to run git");
        assert!(status.status.success(), "git {:?} failed", args);
        self
    }
}
