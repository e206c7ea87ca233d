//! Configuration loading, parsing, and validation.
//!
//! The configuration document is a JSON file (by default `devenv.json`)
//! declaring the requirements a development environment must satisfy,
//! plus optional informational groups displayed by `devcheck info`.

pub mod loader;
pub mod schema;

pub use loader::load;
pub use schema::{
    DevenvConfig, InfoConfig, InfoGroup, InfoItem, RequirementKind, RequirementSpec,
    DEFAULT_CONFIG_FILE,
};
