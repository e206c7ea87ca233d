//! Generator command templating and execution.
//!
//! A requirement may configure a command that produces the missing value
//! (env requirements) or creates the missing file (file requirements).
//! Templates carry `#name#`, `#regex#`, `#path#`, and `#abs_path#`
//! placeholders, substituted with the spec's values before execution.

use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{RequirementKind, RequirementSpec};
use crate::error::{DevcheckError, Result};

/// Result of running a generator command in capture mode.
#[derive(Debug, Clone)]
pub struct CaptureResult {
    /// Captured stdout with leading/trailing whitespace trimmed.
    /// Internal whitespace is preserved.
    pub value: String,
    /// Whether the command exited with status 0.
    pub success: bool,
}

/// Expand the placeholder tokens in a command template.
pub fn render_template(template: &str, spec: &RequirementSpec, base_dir: &Path) -> String {
    let abs_path = match spec.kind {
        RequirementKind::File => {
            let p = Path::new(&spec.target);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                base_dir.join(p)
            }
        }
        RequirementKind::Env => base_dir.to_path_buf(),
    };

    template
        .replace("#name#", &spec.target)
        .replace("#regex#", spec.regex.as_deref().unwrap_or(""))
        .replace("#path#", &spec.target)
        .replace("#abs_path#", &abs_path.to_string_lossy())
}

/// Run a command via the shell and capture its stdout.
///
/// Used for env requirements: the trimmed output becomes the variable's
/// value. A spinner is shown while the command runs when attached to a
/// terminal.
pub fn run_capture(command: &str, base_dir: &Path) -> Result<CaptureResult> {
    let spinner = start_spinner(command);

    let output = Command::new("sh")
        .arg("-c")
        .arg(command)
        .current_dir(base_dir)
        .stdin(Stdio::null())
        .output();

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let output = output.map_err(|_| DevcheckError::CommandFailed {
        command: command.to_string(),
        code: None,
    })?;

    let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if !output.status.success() {
        tracing::warn!(
            "generator command exited with {:?}: {}",
            output.status.code(),
            command
        );
    }

    Ok(CaptureResult {
        value,
        success: output.status.success(),
    })
}

/// Run a command via the shell with output streamed to the user.
///
/// Used for file requirements: the command is expected to create the file
/// as a side effect, and its output stays visible (the command may itself
/// be interactive).
pub fn run_streamed(command: &str, base_dir: &Path) -> Result<bool> {
    let status = Command::new("sh")
        .arg("-c")
        .arg(command)
        .current_dir(base_dir)
        .status()
        .map_err(|_| DevcheckError::CommandFailed {
            command: command.to_string(),
            code: None,
        })?;

    if !status.success() {
        tracing::warn!(
            "generator command exited with {:?}: {}",
            status.code(),
            command
        );
    }

    Ok(status.success())
}

fn start_spinner(command: &str) -> Option<ProgressBar> {
    if !console::Term::stderr().is_term() {
        return None;
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("Running: {}", command));
    pb.enable_steady_tick(Duration::from_millis(100));
    Some(pb)
}
