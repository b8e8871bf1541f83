//! Engine source configuration.

use pane_common::{CachePolicy, EngineLocation, EngineSource};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Engine release fetched when nothing else is configured.
pub const DEFAULT_ENGINE_VERSION: &str = "0.2.0";

/// Release directory for `version`.
pub fn release_url(version: &str) -> String {
    format!("https://github.com/denosaurs/pane/releases/download/{version}/")
}

/// Where the engine library is taken from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// A versioned release directory.
    #[default]
    Release,
    /// A library (or directory holding it) on disk; requires `path`.
    Local,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub source: SourceKind,
    /// Release directory. Derived from `version` when unset.
    pub url: Option<String>,
    pub path: Option<PathBuf>,
    pub version: String,
    pub cache: CachePolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::Release,
            url: None,
            path: None,
            version: DEFAULT_ENGINE_VERSION.into(),
            cache: CachePolicy::Store,
        }
    }
}

impl EngineConfig {
    /// The release directory this config points at.
    pub fn release_url(&self) -> String {
        self.url
            .clone()
            .unwrap_or_else(|| release_url(&self.version))
    }

    /// The configured source, ignoring any environment override. A local
    /// source without a path falls back to the release.
    pub fn to_source(&self) -> EngineSource {
        let location = match (&self.source, &self.path) {
            (SourceKind::Local, Some(path)) => EngineLocation::Local(path.clone()),
            _ => EngineLocation::Remote {
                url: self.release_url(),
                version: self.version.clone(),
            },
        };
        EngineSource {
            location,
            cache: self.cache,
        }
    }
}
