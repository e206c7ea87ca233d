//! Requirement evaluation.
//!
//! The checker evaluates every requirement against an explicit
//! [`EnvStore`] snapshot and the filesystem. Evaluation never
//! short-circuits: the user always sees a status line for every
//! requirement, met or not.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::check::status::{CheckReport, CheckResult};
use crate::config::{RequirementKind, RequirementSpec};
use crate::envfile::EnvStore;
use crate::ui::{BannerKind, Printer, StatusKind};

/// Evaluates requirements against an environment snapshot and a base
/// directory.
pub struct RequirementChecker<'a> {
    env: &'a EnvStore,
    base_dir: PathBuf,
}

impl<'a> RequirementChecker<'a> {
    /// Create a checker over the given environment and project directory.
    pub fn new(env: &'a EnvStore, base_dir: &Path) -> Self {
        Self {
            env,
            base_dir: base_dir.to_path_buf(),
        }
    }

    /// Check that an environment variable is set, and matches `regex` when
    /// one is configured.
    ///
    /// The match is unanchored: the pattern may hit anywhere in the value
    /// unless it anchors itself.
    pub fn check_env_var(&self, name: &str, regex: Option<&str>) -> bool {
        let Some(value) = self.env.get(name) else {
            return false;
        };
        match regex {
            // Patterns are validated at config load; a pattern that still
            // fails to compile here counts as a mismatch.
            Some(pattern) => Regex::new(pattern)
                .map(|re| re.is_match(value))
                .unwrap_or(false),
            None => true,
        }
    }

    /// Check that a regular file exists at `path`, resolved relative to the
    /// base directory when not absolute.
    pub fn check_file(&self, path: &str) -> bool {
        self.resolve_path(path).is_file()
    }

    /// Resolve a requirement path against the base directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let p = Path::new(path);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            self.base_dir.join(p)
        }
    }

    /// Evaluate a single requirement.
    pub fn check_spec(&self, spec: &RequirementSpec) -> bool {
        match spec.kind {
            RequirementKind::Env => self.check_env_var(&spec.target, spec.regex.as_deref()),
            RequirementKind::File => self.check_file(&spec.target),
        }
    }

    /// Evaluate every requirement without printing anything.
    pub fn evaluate(&self, specs: &[RequirementSpec]) -> CheckReport {
        let results = specs
            .iter()
            .map(|spec| CheckResult::new(spec, self.check_spec(spec)))
            .collect();
        CheckReport { results }
    }

    /// Evaluate every requirement, printing one status line per item.
    ///
    /// Does not short-circuit; all requirements are always evaluated so the
    /// user sees the full report.
    pub fn check_all(&self, specs: &[RequirementSpec], printer: &mut Printer) -> CheckReport {
        let report = self.evaluate(specs);
        for result in &report.results {
            let (kind, text) = match (result.kind, result.satisfied) {
                (RequirementKind::Env, true) => {
                    (StatusKind::Success, format!("{} is set", result.label))
                }
                (RequirementKind::Env, false) => {
                    (StatusKind::Error, format!("{} is not set", result.label))
                }
                (RequirementKind::File, true) => {
                    (StatusKind::Success, format!("{} exists", result.label))
                }
                (RequirementKind::File, false) => {
                    (StatusKind::Error, format!("{} is missing", result.label))
                }
            };
            printer.status(kind, &text);
        }
        report
    }
}

/// Run a silent check pass framed by banners, for use at application
/// startup.
///
/// Prints a title banner, evaluates all requirements without per-item
/// output, and on failure prints an error banner directing the user to the
/// setup wizard. Returns the report; the caller decides whether failure is
/// fatal.
pub fn startup_check(
    title: &str,
    specs: &[RequirementSpec],
    env: &EnvStore,
    base_dir: &Path,
    printer: &mut Printer,
) -> CheckReport {
    printer.banner(BannerKind::Info, title, &[]);

    let checker = RequirementChecker::new(env, base_dir);
    let report = checker.evaluate(specs);

    if !report.all_satisfied() {
        let summary = format!("{} requirement(s) are not met.", report.unmet_count());
        printer.banner(
            BannerKind::Error,
            "Development environment is not ready",
            &[
                summary.as_str(),
                "",
                "Run `devcheck setup` to fix them interactively.",
            ],
        );
    }

    report
}
