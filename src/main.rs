//! Devcheck CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use devcheck::cli::{Cli, CommandDispatcher};
use devcheck::ui::{should_use_colors, Printer, Theme};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("devcheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("devcheck=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("devcheck starting with args: {:?}", cli);

    let theme = if cli.no_color || !should_use_colors() {
        Theme::plain()
    } else {
        Theme::new()
    };
    let mut printer = Printer::stdout(theme);

    let dispatcher = CommandDispatcher::new(&cli);
    match dispatcher.dispatch(&cli, &mut printer) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
