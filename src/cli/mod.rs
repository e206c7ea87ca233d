//! Command-line interface and argument parsing.

pub mod args;
pub mod dispatcher;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, InitArgs};
pub use dispatcher::CommandDispatcher;
