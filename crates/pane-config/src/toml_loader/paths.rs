//! Where the config file lives, and seeding it from the template.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use pane_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

const CONFIG_DIR: &str = "pane";
const CONFIG_FILE: &str = "config.toml";

/// `<platform config dir>/pane/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

fn io_failure(action: &str, path: &Path, e: io::Error) -> ConfigError {
    ConfigError::ParseError(format!("failed to {action} {}: {e}", path.display()))
}

/// Write the commented template to `path`, creating missing parent
/// directories. An existing file is left alone.
pub fn init_config_file(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_failure("create directory", parent, e))?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => ConfigError::AlreadyExists(path.to_path_buf()),
            _ => io_failure("create", path, e),
        })?;
    file.write_all(default_config_toml().as_bytes())
        .map_err(|e| io_failure("write", path, e))?;

    info!(path = %path.display(), "wrote config template");
    Ok(())
}
