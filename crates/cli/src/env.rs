// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variable names read by sluice.

include!(concat!(env!("OUT_DIR"), "/env_names.rs"));

/// Whether an environment variable is set, to any value.
pub fn is_set(name: &str) -> bool {
    std::env::var_os(name).is_some()
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
