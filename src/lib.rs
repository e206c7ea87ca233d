//! Devcheck - declarative dev-environment requirements checking and setup.
//!
//! Devcheck replaces ad-hoc `bin/setup` shell scripts with a JSON
//! requirements document and a small interactive CLI: `devcheck check`
//! reports which declared environment variables and files are missing, and
//! `devcheck setup` walks the user through providing them.
//!
//! # Modules
//!
//! - [`check`] - Requirement evaluation and reporting
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`envfile`] - `.env` file loading and single-entry writes
//! - [`error`] - Error types and result aliases
//! - [`systems`] - Pure per-system output set folding helpers
//! - [`ui`] - Banners, status lines, and width-aware text rendering
//! - [`wizard`] - Interactive remediation flow for unmet requirements
//!
//! # Example
//!
//! ```
//! use devcheck::envfile::EnvStore;
//! use devcheck::check::RequirementChecker;
//!
//! let mut env = EnvStore::new();
//! env.set("DATABASE_URL", "postgres://localhost/dev");
//!
//! let checker = RequirementChecker::new(&env, std::path::Path::new("."));
//! assert!(checker.check_env_var("DATABASE_URL", Some("^postgres://")));
//! assert!(!checker.check_env_var("MISSING_VAR", None));
//! ```

pub mod check;
pub mod cli;
pub mod config;
pub mod envfile;
pub mod error;
pub mod systems;
pub mod ui;
pub mod wizard;

pub use error::{DevcheckError, Result};
