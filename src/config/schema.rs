//! Configuration schema definitions for devcheck.
//!
//! This module contains the struct definitions that map to the JSON
//! configuration file format, plus the validated in-memory model the rest
//! of the crate works with.

use serde::{Deserialize, Serialize};

/// Default name of the configuration file inside a project.
pub const DEFAULT_CONFIG_FILE: &str = "devenv.json";

/// What a requirement asserts about the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementKind {
    /// An environment variable must be set (optionally matching a regex).
    Env,
    /// A file must exist on disk.
    File,
}

/// A validated requirement from the configuration document.
///
/// Immutable after parsing; one wizard/check invocation works with a fixed
/// list of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementSpec {
    pub kind: RequirementKind,
    /// Variable name for [`RequirementKind::Env`], file path (absolute or
    /// relative to the project directory) for [`RequirementKind::File`].
    pub target: String,
    /// Pattern the variable value must match (unanchored).
    pub regex: Option<String>,
    /// Human-readable purpose, shown in prompts and manual instructions.
    pub description: Option<String>,
    /// Documentation URL, shown in prompts and manual instructions.
    pub link: Option<String>,
    /// Generator command template. Placeholders `#name#`, `#regex#`,
    /// `#path#`, and `#abs_path#` expand to the spec's values.
    pub command: Option<String>,
}

impl RequirementSpec {
    /// Label used in status lines and prompts.
    pub fn label(&self) -> &str {
        &self.target
    }
}

/// One entry of an informational group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A named group of informational entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoGroup {
    pub name: String,
    #[serde(default)]
    pub items: Vec<InfoItem>,
}

/// The `info` section of the configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoConfig {
    #[serde(default)]
    pub groups: Vec<InfoGroup>,
}

/// Validated configuration document.
#[derive(Debug, Clone, Default)]
pub struct DevenvConfig {
    pub requirements: Vec<RequirementSpec>,
    pub info: InfoConfig,
}

/// Raw requirement entry as written in JSON, before validation.
///
/// Older configuration files used the literal string `"null"` where a field
/// was absent; [`normalize`] folds that sentinel into a proper `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct RawRequirement {
    #[serde(rename = "type")]
    pub kind: RequirementKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub regex: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub command: Option<String>,
}

/// Raw configuration document as written in JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct RawConfig {
    pub requirements: Vec<RawRequirement>,
    pub info: InfoConfig,
}

/// Fold empty strings and the legacy `"null"` sentinel into `None`.
pub(crate) fn normalize(value: Option<String>) -> Option<String> {
    match value {
        Some(s) if s.is_empty() || s == "null" => None,
        other => other,
    }
}
