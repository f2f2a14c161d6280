// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build script that generates env var name constants for `env.rs`.

// Build scripts should panic on failure — there is no meaningful recovery.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::env;
use std::fs;
use std::path::Path;

const NAMES: &[(&str, &str)] = &[
    ("NO_COLOR", "disables color output (any value)"),
    ("COLOR", "forces color output (any value)"),
    ("CLAUDE_CODE", "indicates Claude Code agent environment"),
    ("CODEX", "indicates Codex agent environment"),
    ("CURSOR", "indicates Cursor agent environment"),
    ("CI", "indicates CI environment"),
    ("SLUICE_CONFIG", "path to the config file, mirrors `--config`"),
    ("SLUICE_LOG", "configures tracing log filter"),
    ("GIT_CEILING_DIRECTORIES", "stops repository discovery at these directories"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let dest = Path::new(&out_dir).join("env_names.rs");

    let mut contents = String::new();
    for (name, doc) in NAMES {
        contents.push_str(&format!(
            "/// Environment variable: {doc}.\npub const {name}: &str = \"{name}\";\n"
        ));
    }

    fs::write(dest, contents).expect("failed to write env_names.rs");
    println!("cargo::rerun-if-changed=build.rs");
}
