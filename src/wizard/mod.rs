//! Interactive setup wizard.
//!
//! The wizard walks the configured requirements in order and remediates
//! each unmet one: running its generator command when one is configured,
//! prompting the user for env values otherwise, and printing manual
//! instructions for files that cannot be generated. A final check pass
//! decides the overall outcome.
//!
//! No individual step is fatal. A generator that fails, a prompt that
//! never gets a valid answer, or a file the user has to create by hand all
//! simply leave the requirement unmet, and that surfaces in the final
//! check.

pub mod command;
pub mod input;

pub use command::{render_template, run_capture, run_streamed, CaptureResult};
pub use input::{InputSource, QueuedInput, TerminalInput};

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::check::RequirementChecker;
use crate::config::{DevenvConfig, RequirementKind, RequirementSpec};
use crate::envfile::{self, EnvStore, DEFAULT_ENV_FILES};
use crate::error::{DevcheckError, Result};
use crate::ui::{BannerKind, Printer, StatusKind};

/// How many invalid answers a prompt tolerates before giving up on the
/// requirement.
pub const DEFAULT_MAX_PROMPT_ATTEMPTS: usize = 10;

/// Orchestrates the requirement remediation flow for one invocation.
pub struct SetupWizard<'a> {
    config: &'a DevenvConfig,
    env: EnvStore,
    base_dir: PathBuf,
    env_file: PathBuf,
    input: &'a mut dyn InputSource,
    printer: &'a mut Printer,
    max_prompt_attempts: usize,
}

impl<'a> SetupWizard<'a> {
    /// Create a wizard session.
    ///
    /// `env` is the starting environment snapshot; values the wizard
    /// obtains are recorded both there and in `env_file_name` under
    /// `base_dir`.
    pub fn new(
        config: &'a DevenvConfig,
        env: EnvStore,
        base_dir: &Path,
        env_file_name: &str,
        input: &'a mut dyn InputSource,
        printer: &'a mut Printer,
    ) -> Self {
        Self {
            config,
            env,
            base_dir: base_dir.to_path_buf(),
            env_file: base_dir.join(env_file_name),
            input,
            printer,
            max_prompt_attempts: DEFAULT_MAX_PROMPT_ATTEMPTS,
        }
    }

    /// Override the prompt attempt cap.
    pub fn with_max_prompt_attempts(mut self, attempts: usize) -> Self {
        self.max_prompt_attempts = attempts;
        self
    }

    /// Run the wizard to completion.
    ///
    /// Returns `Ok(true)` when the final check finds every requirement
    /// satisfied.
    pub fn run(&mut self) -> Result<bool> {
        self.printer.banner(
            BannerKind::Info,
            "Development environment setup",
            &["Checking the declared requirements and collecting anything that is missing."],
        );

        let found = self.env.load_dir(&self.base_dir, DEFAULT_ENV_FILES)?;
        if found {
            self.printer.status(StatusKind::Success, "loaded env file(s)");
        } else {
            self.printer
                .status(StatusKind::Warning, "no env file found, starting fresh");
        }

        let specs = self.config.requirements.clone();
        for spec in &specs {
            if self.is_satisfied(spec) {
                tracing::debug!("{} already satisfied, skipping", spec.target);
                continue;
            }
            match (&spec.command, spec.kind) {
                (Some(template), RequirementKind::Env) => self.generate_env(spec, template)?,
                (Some(template), RequirementKind::File) => self.generate_file(spec, template),
                (None, RequirementKind::Env) => self.remediate_env_prompt(spec)?,
                (None, RequirementKind::File) => self.manual_file(spec),
            }
        }

        self.final_check(&specs)
    }

    fn is_satisfied(&self, spec: &RequirementSpec) -> bool {
        RequirementChecker::new(&self.env, &self.base_dir).check_spec(spec)
    }

    /// Run a generator command and persist its trimmed stdout as the
    /// variable's value.
    ///
    /// A failing command writes nothing; the requirement stays unmet and
    /// the final check reports it.
    fn generate_env(&mut self, spec: &RequirementSpec, template: &str) -> Result<()> {
        let cmd = command::render_template(template, spec, &self.base_dir);
        self.printer.status(
            StatusKind::Warning,
            &format!("{} is not set, running generator", spec.target),
        );

        match command::run_capture(&cmd, &self.base_dir) {
            Ok(result) if result.success => {
                envfile::write_entry(&self.env_file, &spec.target, &result.value)?;
                self.env.set(spec.target.clone(), result.value);
                self.printer.status(
                    StatusKind::Success,
                    &format!("generated value for {}", spec.target),
                );
            }
            Ok(_) => {
                self.printer.status(
                    StatusKind::Warning,
                    &format!("generator for {} did not succeed", spec.target),
                );
            }
            Err(e) => {
                tracing::warn!("generator for {} failed: {}", spec.target, e);
                self.printer.status(
                    StatusKind::Warning,
                    &format!("generator for {} could not be run", spec.target),
                );
            }
        }
        Ok(())
    }

    /// Run a generator command that creates the file as a side effect,
    /// streaming its output to the user.
    fn generate_file(&mut self, spec: &RequirementSpec, template: &str) {
        let cmd = command::render_template(template, spec, &self.base_dir);
        self.printer.status(
            StatusKind::Warning,
            &format!("{} is missing, running generator", spec.target),
        );

        match command::run_streamed(&cmd, &self.base_dir) {
            Ok(true) => {}
            Ok(false) | Err(_) => {
                self.printer.status(
                    StatusKind::Warning,
                    &format!("generator for {} did not succeed", spec.target),
                );
            }
        }
    }

    /// Prompt for an env value until it is non-empty and matches the
    /// configured regex, then persist it.
    fn remediate_env_prompt(&mut self, spec: &RequirementSpec) -> Result<()> {
        self.printer.blank();
        self.printer
            .println(&format!("A value for {} is required.", spec.target));
        if let Some(description) = &spec.description {
            self.printer.println(description);
        }
        if let Some(link) = &spec.link {
            self.printer.println(&format!("See: {}", link));
        }

        match self.prompt_value(spec) {
            Ok(value) => {
                envfile::write_entry(&self.env_file, &spec.target, &value)?;
                self.env.set(spec.target.clone(), value);
                self.printer
                    .status(StatusKind::Success, &format!("{} saved", spec.target));
                Ok(())
            }
            Err(DevcheckError::PromptAttemptsExhausted { name, attempts }) => {
                self.printer.status(
                    StatusKind::Warning,
                    &format!("no valid value for {} after {} attempts", name, attempts),
                );
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn prompt_value(&mut self, spec: &RequirementSpec) -> Result<String> {
        let prompt = format!("Enter a value for {}", spec.target);

        for _ in 0..self.max_prompt_attempts {
            let value = self.input.read_value(&prompt)?;
            let value = value.trim().to_string();

            if value.is_empty() {
                self.printer
                    .status(StatusKind::Warning, "a value is required");
                continue;
            }
            if let Some(pattern) = &spec.regex {
                let matches = Regex::new(pattern)
                    .map(|re| re.is_match(&value))
                    .unwrap_or(false);
                if !matches {
                    self.printer.status(
                        StatusKind::Warning,
                        &format!("value does not match pattern {}", pattern),
                    );
                    continue;
                }
            }
            return Ok(value);
        }

        Err(DevcheckError::PromptAttemptsExhausted {
            name: spec.target.clone(),
            attempts: self.max_prompt_attempts,
        })
    }

    /// Print manual instructions for a file the wizard cannot create.
    fn manual_file(&mut self, spec: &RequirementSpec) {
        let checker = RequirementChecker::new(&self.env, &self.base_dir);
        let mut body = vec![format!(
            "Create the file at {}",
            checker.resolve_path(&spec.target).display()
        )];
        if let Some(description) = &spec.description {
            body.push(String::new());
            body.push(description.clone());
        }
        if let Some(link) = &spec.link {
            body.push(format!("See: {}", link));
        }

        let body_refs: Vec<&str> = body.iter().map(String::as_str).collect();
        self.printer.banner(
            BannerKind::Warning,
            &format!("{} is missing", spec.target),
            &body_refs,
        );
    }

    /// Re-check every requirement and report the overall outcome.
    fn final_check(&mut self, specs: &[RequirementSpec]) -> Result<bool> {
        self.printer.blank();
        let checker = RequirementChecker::new(&self.env, &self.base_dir);
        let report = checker.check_all(specs, self.printer);

        if report.all_satisfied() {
            self.printer.banner(
                BannerKind::Success,
                "Setup complete",
                &["All requirements are satisfied."],
            );
        } else {
            let summary = format!("{} requirement(s) are still unmet.", report.unmet_count());
            self.printer.banner(
                BannerKind::Warning,
                "Setup incomplete",
                &[
                    summary.as_str(),
                    "",
                    "Re-run `devcheck setup` once the manual steps are done.",
                ],
            );
        }

        Ok(report.all_satisfied())
    }
}
