//! Configuration file loading and validation.
//!
//! The JSON document is parsed exactly once per invocation into the typed
//! [`DevenvConfig`] model. Malformed JSON and structurally invalid entries
//! are fatal; nothing downstream needs to re-check the document.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::config::schema::{
    normalize, DevenvConfig, RawConfig, RawRequirement, RequirementKind, RequirementSpec,
};
use crate::error::{DevcheckError, Result};

/// Load and validate the configuration document at `path`.
pub fn load(path: &Path) -> Result<DevenvConfig> {
    if !path.is_file() {
        return Err(DevcheckError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    let raw: RawConfig =
        serde_json::from_str(&content).map_err(|e| DevcheckError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut requirements = Vec::with_capacity(raw.requirements.len());
    for (index, entry) in raw.requirements.into_iter().enumerate() {
        requirements.push(validate_requirement(index, entry)?);
    }

    tracing::debug!(
        "loaded {} requirements from {}",
        requirements.len(),
        path.display()
    );

    Ok(DevenvConfig {
        requirements,
        info: raw.info,
    })
}

/// Turn a raw entry into a validated [`RequirementSpec`].
fn validate_requirement(index: usize, raw: RawRequirement) -> Result<RequirementSpec> {
    let target = match raw.kind {
        RequirementKind::Env => normalize(raw.name).ok_or_else(|| {
            DevcheckError::ConfigValidationError {
                message: format!("requirement {}: env requirement is missing 'name'", index),
            }
        })?,
        RequirementKind::File => normalize(raw.path).ok_or_else(|| {
            DevcheckError::ConfigValidationError {
                message: format!("requirement {}: file requirement is missing 'path'", index),
            }
        })?,
    };

    let regex = normalize(raw.regex);
    if let Some(pattern) = &regex {
        Regex::new(pattern).map_err(|e| DevcheckError::ConfigValidationError {
            message: format!("requirement {} ({}): invalid regex: {}", index, target, e),
        })?;
    }

    Ok(RequirementSpec {
        kind: raw.kind,
        target,
        regex,
        description: normalize(raw.description),
        link: normalize(raw.link),
        command: normalize(raw.command),
    })
}
