// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Declared option schemas for task configuration.
//!
//! A task declares its options once. Loading a `[tasks.<name>]` table checks
//! option names and value types against the schema, then deserializes into
//! the task's typed config struct, which supplies the defaults.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::suggest::suggest_name;
use crate::error::{Error, Result};

/// Value type accepted by an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKind {
    String,
    /// A string that may be left unset.
    OptionalString,
    StringList,
    Bool,
}

impl OptionKind {
    fn accepts(self, value: &toml::Value) -> bool {
        match (self, value) {
            (OptionKind::String | OptionKind::OptionalString, toml::Value::String(_)) => true,
            (OptionKind::StringList, toml::Value::Array(items)) => items.iter().all(|v| v.is_str()),
            (OptionKind::Bool, toml::Value::Boolean(_)) => true,
            _ => false,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            OptionKind::String => "a string",
            OptionKind::OptionalString => "a string (or unset)",
            OptionKind::StringList => "a list of strings",
            OptionKind::Bool => "a boolean",
        }
    }
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OptionKind::String => "string",
            OptionKind::OptionalString => "string?",
            OptionKind::StringList => "[string]",
            OptionKind::Bool => "bool",
        };
        f.write_str(name)
    }
}

/// One declared option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionSpec {
    pub name: &'static str,
    pub kind: OptionKind,
    /// Default value (None for options that default to unset).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<toml::Value>,
    pub description: &'static str,
}

/// The full option set of a task.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConfigSchema {
    options: Vec<OptionSpec>,
}

impl ConfigSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an option.
    pub fn option(
        mut self,
        name: &'static str,
        kind: OptionKind,
        default: Option<toml::Value>,
        description: &'static str,
    ) -> Self {
        self.options.push(OptionSpec {
            name,
            kind,
            default,
            description,
        });
        self
    }

    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.name == name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.options.iter().map(|o| o.name).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OptionSpec> {
        self.options.iter()
    }

    /// Validate `value` against the schema and deserialize it.
    ///
    /// `None` (no table given) resolves to all defaults.
    pub fn resolve<T: DeserializeOwned>(
        &self,
        task: &str,
        value: Option<&toml::Value>,
    ) -> Result<T> {
        let invalid = |message: String| Error::ConfigValidation {
            task: task.to_string(),
            message,
        };

        let table = match value {
            None => toml::Table::new(),
            Some(toml::Value::Table(t)) => t.clone(),
            Some(other) => {
                return Err(invalid(format!(
                    "expected a table of options, got {}",
                    other.type_str()
                )));
            }
        };

        for (key, value) in &table {
            let Some(spec) = self.get(key) else {
                let known = self.names();
                let message = match suggest_name(key, &known) {
                    Some(suggested) => {
                        format!("unknown option `{key}`. Did you mean `{suggested}`?")
                    }
                    None => format!(
                        "unknown option `{key}`\n  Valid options: {}",
                        known.join(", ")
                    ),
                };
                return Err(invalid(message));
            };
            if !spec.kind.accepts(value) {
                return Err(invalid(format!(
                    "option `{key}` must be {}, got {}",
                    spec.kind.describe(),
                    value.type_str()
                )));
            }
        }

        toml::Value::Table(table)
            .try_into::<T>()
            .map_err(|e| invalid(e.to_string()))
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
