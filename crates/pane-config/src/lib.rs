//! Pane configuration.
//!
//! TOML configuration for the engine source, logging, and the defaults the
//! `pane` binary opens windows with. All sections use serde defaults so a
//! partial file (or no file at all) works.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pane_config::{engine_source, load_config};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", engine_source(&config.engine));
//! ```

pub mod env;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use env::{engine_source, resolve_source, PLUGIN_URL_VARS};
pub use schema::{PaneConfig, CONFIG_SCHEMA_VERSION};

use pane_common::ConfigError;
use std::path::{Path, PathBuf};

/// Load config from the platform default path and validate it.
///
/// A missing file yields the defaults.
pub fn load_config() -> Result<PaneConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from `path` and validate it. Unlike [`load_config`], a
/// missing file is an error.
pub fn load_config_from(path: &Path) -> Result<PaneConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Write the commented config template to `path`, or to the platform
/// default path when none is given. Returns where it was written.
pub fn init_config(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => toml_loader::default_config_path()?,
    };
    toml_loader::init_config_file(&path)?;
    Ok(path)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &PaneConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
