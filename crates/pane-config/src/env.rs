//! Environment override for the engine source.
//!
//! When a plugin URL is set in the environment it replaces the configured
//! source and the cache is bypassed, so a locally built engine is always
//! picked up fresh.

use std::path::PathBuf;

use pane_common::{CachePolicy, EngineLocation, EngineSource};
use tracing::info;

use crate::schema::EngineConfig;

/// Variables consulted for an override, in order.
pub const PLUGIN_URL_VARS: [&str; 2] = ["PANE_PLUGIN_URL", "PLUGIN_URL"];

/// The engine source after applying any environment override.
pub fn engine_source(config: &EngineConfig) -> EngineSource {
    let override_url = PLUGIN_URL_VARS
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|value| !value.is_empty()));
    resolve_source(config, override_url.as_deref())
}

/// Apply `override_url` to the configured source. `file://` URLs and bare
/// paths select a local engine; anything else is a remote release
/// directory.
pub fn resolve_source(config: &EngineConfig, override_url: Option<&str>) -> EngineSource {
    let Some(url) = override_url else {
        return config.to_source();
    };
    info!(url, "engine source overridden from the environment");
    let location = if let Some(path) = url.strip_prefix("file://") {
        EngineLocation::Local(PathBuf::from(path))
    } else if url.contains("://") {
        EngineLocation::Remote {
            url: url.to_owned(),
            version: config.version.clone(),
        }
    } else {
        EngineLocation::Local(PathBuf::from(url))
    };
    EngineSource {
        location,
        cache: CachePolicy::None,
    }
}
