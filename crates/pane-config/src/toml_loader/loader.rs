//! Core TOML config loading: read from path or platform default.

use crate::schema::PaneConfig;
use pane_common::ConfigError;
use std::io;
use std::path::Path;
use tracing::{debug, info};

use super::paths::default_config_path;

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. Validation is left to the
/// caller.
pub fn load_from_path(path: &Path) -> Result<PaneConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config: PaneConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/pane/config.toml`
/// On Linux: `~/.config/pane/config.toml`
///
/// A missing file yields the defaults; nothing is written.
pub fn load_default() -> Result<PaneConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            debug!(path = %path.display(), "no config found, using defaults");
            Ok(PaneConfig::default())
        }
        Err(e) => Err(e),
    }
}
