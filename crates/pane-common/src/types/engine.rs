//! Where the native engine comes from, as consumed at connection time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Base name of the engine library.
pub const ENGINE_LIBRARY_NAME: &str = "pane";

/// Whether a downloaded engine artifact is kept in the local cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CachePolicy {
    #[default]
    Store,
    /// Bypass the cache; always fetch or open the artifact directly.
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineLocation {
    /// A directory or library file on disk.
    Local(PathBuf),
    /// A versioned release directory (the URL ends with `/`).
    Remote { url: String, version: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSource {
    pub location: EngineLocation,
    pub cache: CachePolicy,
}

impl EngineSource {
    /// Concrete artifact address for the current platform.
    pub fn artifact(&self) -> String {
        let file = library_file_name(ENGINE_LIBRARY_NAME);
        match &self.location {
            EngineLocation::Local(path) => {
                if path.extension().is_some() {
                    path.display().to_string()
                } else {
                    path.join(file).display().to_string()
                }
            }
            EngineLocation::Remote { url, .. } => {
                if url.ends_with('/') {
                    format!("{url}{file}")
                } else {
                    format!("{url}/{file}")
                }
            }
        }
    }
}

impl fmt::Display for EngineSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = match self.cache {
            CachePolicy::Store => "store",
            CachePolicy::None => "none",
        };
        write!(f, "{} (cache: {cache})", self.artifact())
    }
}

/// Platform-specific dynamic library file name for `name`.
pub fn library_file_name(name: &str) -> String {
    if cfg!(target_os = "windows") {
        format!("{name}.dll")
    } else if cfg!(target_os = "macos") {
        format!("lib{name}.dylib")
    } else {
        format!("lib{name}.so")
    }
}
