// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles sluice.toml parsing with version validation, unknown key warnings
//! and strict per-task option validation. Every task table is resolved here,
//! so invalid options never reach a task run.

mod phan;
mod schema;
mod suggest;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use phan::PhanConfig;
pub use schema::{ConfigSchema, OptionKind, OptionSpec};
pub use suggest::suggest_name;

use crate::error::{Error, Result};
use suggest::warn_unknown_key;

/// Supported config file version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Config file name looked up by discovery.
pub const CONFIG_FILE_NAME: &str = "sluice.toml";

/// Names of the tasks sluice knows how to build.
pub const TASK_NAMES: &[&str] = &["phan"];

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "bin_dir", "tasks"];

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: Option<i64>,

    #[serde(default)]
    bin_dir: Option<PathBuf>,

    #[serde(default)]
    tasks: Option<toml::Table>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Directory searched for tool executables before PATH.
    pub bin_dir: Option<PathBuf>,

    /// Enabled tasks with their resolved options.
    pub tasks: Vec<TaskConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            bin_dir: None,
            tasks: vec![TaskConfig::Phan(PhanConfig::default())],
        }
    }
}

/// Resolved options for one enabled task.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskConfig {
    Phan(PhanConfig),
}

impl TaskConfig {
    pub fn name(&self) -> &'static str {
        match self {
            TaskConfig::Phan(_) => "phan",
        }
    }

    /// Resolve the options table for the task called `name`.
    pub fn resolve(name: &str, value: Option<&toml::Value>) -> Result<Self> {
        match name {
            "phan" => Ok(TaskConfig::Phan(PhanConfig::from_toml(value)?)),
            _ => {
                let message = match suggest_name(name, TASK_NAMES) {
                    Some(suggested) => {
                        format!("unknown task `{name}`. Did you mean `{suggested}`?")
                    }
                    None => format!(
                        "unknown task `{name}`\n  Available tasks: {}",
                        TASK_NAMES.join(", ")
                    ),
                };
                Err(Error::Config {
                    message,
                    path: None,
                })
            }
        }
    }
}

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config from string content, warning on unknown top-level keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = flexible.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})\n  Upgrade sluice to use this config.",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key, KNOWN_KEYS);
        }
    }

    let tasks = match &flexible.tasks {
        None => Config::default().tasks,
        Some(table) => table
            .iter()
            .map(|(name, value)| {
                TaskConfig::resolve(name, Some(value)).map_err(|e| match e {
                    Error::Config { message, .. } => Error::Config {
                        message,
                        path: Some(path.to_path_buf()),
                    },
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?,
    };

    tracing::debug!(
        "loaded {} with tasks: {:?}",
        path.display(),
        tasks.iter().map(TaskConfig::name).collect::<Vec<_>>()
    );

    Ok(Config {
        version,
        bin_dir: flexible.bin_dir,
        tasks,
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
