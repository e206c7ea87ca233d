//! Command dispatch.
//!
//! Routes parsed CLI arguments to the command implementations and maps
//! their outcomes to process exit codes (0 = all requirements satisfied,
//! 1 = otherwise).

use std::path::PathBuf;

use clap::CommandFactory;

use crate::check::{startup_check, RequirementChecker};
use crate::cli::args::{CheckArgs, Cli, Commands, CompletionsArgs, InitArgs};
use crate::config::{self, DevenvConfig, DEFAULT_CONFIG_FILE};
use crate::envfile::{EnvStore, DEFAULT_ENV_FILES};
use crate::error::{DevcheckError, Result};
use crate::ui::{BannerKind, Printer};
use crate::wizard::{SetupWizard, TerminalInput};

/// Resolves paths from the CLI and runs the requested command.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config_path: PathBuf,
    env_file: String,
    quiet: bool,
}

impl CommandDispatcher {
    /// Build a dispatcher from parsed arguments.
    pub fn new(cli: &Cli) -> Self {
        let project_root = cli
            .project
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());
        let config_path = cli
            .config
            .clone()
            .unwrap_or_else(|| project_root.join(DEFAULT_CONFIG_FILE));
        Self {
            project_root,
            config_path,
            env_file: cli.env_file.clone(),
            quiet: cli.quiet,
        }
    }

    /// Run the selected command, returning the process exit code.
    pub fn dispatch(&self, cli: &Cli, printer: &mut Printer) -> Result<u8> {
        match &cli.command {
            Some(Commands::Check(args)) => self.run_check(args, printer),
            None => self.run_check(&CheckArgs::default(), printer),
            Some(Commands::Setup) => self.run_setup(printer),
            Some(Commands::Info) => self.run_info(printer),
            Some(Commands::Init(args)) => self.run_init(args, printer),
            Some(Commands::Completions(args)) => Self::run_completions(args),
        }
    }

    fn load_config(&self) -> Result<DevenvConfig> {
        config::load(&self.config_path)
    }

    fn run_check(&self, args: &CheckArgs, printer: &mut Printer) -> Result<u8> {
        let config = self.load_config()?;
        let mut env = EnvStore::from_process();
        let found = env.load_dir(&self.project_root, DEFAULT_ENV_FILES)?;

        if args.startup {
            let report = startup_check(
                &args.title,
                &config.requirements,
                &env,
                &self.project_root,
                printer,
            );
            return Ok(u8::from(!report.all_satisfied()));
        }

        if !found {
            let hint = format!(
                "Expected {} or {} in {}",
                DEFAULT_ENV_FILES[0],
                DEFAULT_ENV_FILES[1],
                self.project_root.display()
            );
            printer.banner(BannerKind::Warning, "No env file found", &[hint.as_str()]);
        }

        let checker = RequirementChecker::new(&env, &self.project_root);
        let report = if self.quiet {
            checker.evaluate(&config.requirements)
        } else {
            checker.check_all(&config.requirements, printer)
        };

        if report.all_satisfied() {
            printer.banner(
                BannerKind::Success,
                "All requirements satisfied",
                &[],
            );
        } else {
            let summary = format!("{} requirement(s) are not met.", report.unmet_count());
            printer.banner(
                BannerKind::Error,
                "Requirements check failed",
                &[
                    summary.as_str(),
                    "",
                    "Run `devcheck setup` to fix them interactively.",
                ],
            );
        }

        Ok(u8::from(!report.all_satisfied()))
    }

    fn run_setup(&self, printer: &mut Printer) -> Result<u8> {
        let config = self.load_config()?;
        let env = EnvStore::from_process();
        let mut input = TerminalInput::new();

        let mut wizard = SetupWizard::new(
            &config,
            env,
            &self.project_root,
            &self.env_file,
            &mut input,
            printer,
        );
        let ok = wizard.run()?;
        Ok(u8::from(!ok))
    }

    fn run_info(&self, printer: &mut Printer) -> Result<u8> {
        let config = self.load_config()?;

        if config.info.groups.is_empty() {
            printer.banner(
                BannerKind::Warning,
                "No info configured",
                &["The config has no `info.groups` section."],
            );
            return Ok(0);
        }

        for group in &config.info.groups {
            let lines: Vec<String> = group
                .items
                .iter()
                .map(|item| match &item.description {
                    Some(description) => format!("{}: {}", item.name, description),
                    None => item.name.clone(),
                })
                .collect();
            let line_refs: Vec<&str> = lines.iter().map(String::as_str).collect();
            printer.banner(BannerKind::Info, &group.name, &line_refs);
        }
        Ok(0)
    }

    fn run_init(&self, args: &InitArgs, printer: &mut Printer) -> Result<u8> {
        if self.config_path.exists() && !args.force {
            return Err(DevcheckError::ConfigValidationError {
                message: format!(
                    "{} already exists (use --force to overwrite)",
                    self.config_path.display()
                ),
            });
        }

        let starter = serde_json::json!({
            "requirements": [
                {
                    "type": "env",
                    "name": "EXAMPLE_TOKEN",
                    "regex": "^.+$",
                    "description": "Example credential; replace with your own requirements",
                    "link": null,
                    "command": null
                },
                {
                    "type": "file",
                    "path": "config/example.key",
                    "description": "Example file requirement",
                    "link": null,
                    "command": null
                }
            ],
            "info": { "groups": [] }
        });

        let mut content = serde_json::to_string_pretty(&starter)
            .map_err(|e| DevcheckError::Other(e.into()))?;
        content.push('\n');
        std::fs::write(&self.config_path, content)?;

        let note = format!("Wrote {}", self.config_path.display());
        printer.banner(BannerKind::Success, "Config created", &[note.as_str()]);
        Ok(0)
    }

    fn run_completions(args: &CompletionsArgs) -> Result<u8> {
        let mut cmd = Cli::command();
        clap_complete::generate(args.shell, &mut cmd, "devcheck", &mut std::io::stdout());
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Theme;
    use clap::Parser;
    use tempfile::TempDir;

    fn sink_printer() -> Printer {
        Printer::with_writer(80, Theme::plain(), Box::new(std::io::sink()))
    }

    fn cli_for(dir: &TempDir, extra: &[&str]) -> Cli {
        let mut argv = vec!["devcheck".to_string()];
        argv.extend(extra.iter().map(|s| s.to_string()));
        argv.push("--project".into());
        argv.push(dir.path().display().to_string());
        Cli::parse_from(argv)
    }

    #[test]
    fn check_fails_without_config() {
        let temp = TempDir::new().unwrap();
        let cli = cli_for(&temp, &["check"]);
        let dispatcher = CommandDispatcher::new(&cli);
        let result = dispatcher.dispatch(&cli, &mut sink_printer());
        assert!(matches!(result, Err(DevcheckError::ConfigNotFound { .. })));
    }

    #[test]
    fn check_exit_codes_reflect_satisfaction() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("present.txt"), "x").unwrap();
        std::fs::write(
            temp.path().join(DEFAULT_CONFIG_FILE),
            r#"{"requirements": [{"type": "file", "path": "present.txt"}]}"#,
        )
        .unwrap();

        let cli = cli_for(&temp, &["check"]);
        let dispatcher = CommandDispatcher::new(&cli);
        let code = dispatcher.dispatch(&cli, &mut sink_printer()).unwrap();
        assert_eq!(code, 0);

        std::fs::write(
            temp.path().join(DEFAULT_CONFIG_FILE),
            r#"{"requirements": [{"type": "file", "path": "absent.txt"}]}"#,
        )
        .unwrap();
        let code = dispatcher.dispatch(&cli, &mut sink_printer()).unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn startup_check_uses_same_exit_codes() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(DEFAULT_CONFIG_FILE),
            r#"{"requirements": [{"type": "file", "path": "absent.txt"}]}"#,
        )
        .unwrap();

        let cli = cli_for(&temp, &["check", "--startup", "--title", "Test"]);
        let dispatcher = CommandDispatcher::new(&cli);
        let code = dispatcher.dispatch(&cli, &mut sink_printer()).unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn init_writes_loadable_config() {
        let temp = TempDir::new().unwrap();
        let cli = cli_for(&temp, &["init"]);
        let dispatcher = CommandDispatcher::new(&cli);
        let code = dispatcher.dispatch(&cli, &mut sink_printer()).unwrap();
        assert_eq!(code, 0);

        let config = config::load(&temp.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        assert_eq!(config.requirements.len(), 2);
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(DEFAULT_CONFIG_FILE), "{}").unwrap();

        let cli = cli_for(&temp, &["init"]);
        let dispatcher = CommandDispatcher::new(&cli);
        assert!(dispatcher.dispatch(&cli, &mut sink_printer()).is_err());

        let cli = cli_for(&temp, &["init", "--force"]);
        let dispatcher = CommandDispatcher::new(&cli);
        assert_eq!(dispatcher.dispatch(&cli, &mut sink_printer()).unwrap(), 0);
    }

    #[test]
    fn info_renders_groups() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(DEFAULT_CONFIG_FILE),
            r#"{"info": {"groups": [{"name": "Tips", "items": [{"name": "bin/dev"}]}]}}"#,
        )
        .unwrap();

        let cli = cli_for(&temp, &["info"]);
        let dispatcher = CommandDispatcher::new(&cli);
        assert_eq!(dispatcher.dispatch(&cli, &mut sink_printer()).unwrap(), 0);
    }
}
