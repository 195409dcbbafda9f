//! Configuration loading and validation.
//!
//! Config files: `skillroute.toml`, `skillroute.yaml`, `skillroute.yml` or `skillroute.json`,
//! searched in `./` then in the user config directory.
//!
//! Supports `${ENV_VAR}` substitution in all string values.

pub mod env_subst;
pub mod loader;
pub mod schema;
pub mod validate;

pub use {
    loader::{config_dir, discover_and_load, find_config_file_in, load_config, load_from_dirs},
    schema::{LoggingConfig, ServerConfig, SkillrouteConfig, SlotsConfig},
    validate::{Diagnostic, Severity, ValidationResult, validate},
};
