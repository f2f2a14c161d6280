// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Phan task configuration.

use serde::{Deserialize, Serialize};

use super::schema::{ConfigSchema, OptionKind};

/// Resolved options for the phan task.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PhanConfig {
    /// Report format passed as `--output-mode`.
    #[serde(default = "PhanConfig::default_output_mode")]
    pub output_mode: String,

    /// Report destination passed as `--output` (None = stdout).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Phan's own config file, passed as `--config-file`.
    #[serde(default = "PhanConfig::default_config_file")]
    pub config_file: String,

    /// File extensions that make the task run.
    #[serde(default = "PhanConfig::default_triggered_by")]
    pub triggered_by: Vec<String>,

    /// Analyze only the files in scope instead of the whole project.
    #[serde(default)]
    pub diff_only: bool,
}

impl Default for PhanConfig {
    fn default() -> Self {
        Self {
            output_mode: Self::default_output_mode(),
            output: None,
            config_file: Self::default_config_file(),
            triggered_by: Self::default_triggered_by(),
            diff_only: false,
        }
    }
}

impl PhanConfig {
    pub(crate) fn default_output_mode() -> String {
        "text".to_string()
    }

    pub(crate) fn default_config_file() -> String {
        ".phan/config.php".to_string()
    }

    pub(crate) fn default_triggered_by() -> Vec<String> {
        vec!["php".to_string()]
    }

    /// Declared options with their types and defaults.
    pub fn schema() -> ConfigSchema {
        ConfigSchema::new()
            .option(
                "output_mode",
                OptionKind::String,
                Some(Self::default_output_mode().into()),
                "report format (text, json, checkstyle, ...)",
            )
            .option(
                "output",
                OptionKind::OptionalString,
                None,
                "write the report to this file instead of stdout",
            )
            .option(
                "config_file",
                OptionKind::String,
                Some(Self::default_config_file().into()),
                "path to phan's config file",
            )
            .option(
                "triggered_by",
                OptionKind::StringList,
                Some(Self::default_triggered_by().into()),
                "file extensions that trigger the task",
            )
            .option(
                "diff_only",
                OptionKind::Bool,
                Some(false.into()),
                "analyze only the files in scope",
            )
    }

    /// Validate and resolve a `[tasks.phan]` table.
    pub fn from_toml(value: Option<&toml::Value>) -> crate::error::Result<Self> {
        Self::schema().resolve("phan", value)
    }
}

#[cfg(test)]
#[path = "phan_tests.rs"]
mod tests;
