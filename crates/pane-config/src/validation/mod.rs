//! Full configuration validation.
//!
//! Checks numeric ranges and engine source consistency, collecting every
//! problem into a single `ConfigError`.

mod helpers;


use std::sync::LazyLock;

use helpers::{validate_range, validate_range_u64};
use pane_common::ConfigError;
use regex::Regex;

use crate::schema::{PaneConfig, SourceKind};

/// Release versions are plain `MAJOR.MINOR.PATCH`.
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+$").unwrap());

static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(https?|file)://\S+$").unwrap());

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PaneConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_engine(&mut errors, config);
    validate_range(&mut errors, "window.width", config.window.width, 1, 16384);
    validate_range(&mut errors, "window.height", config.window.height, 1, 16384);
    validate_range_u64(
        &mut errors,
        "event_loop.poll_interval_ms",
        config.event_loop.poll_interval_ms,
        1,
        1000,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_engine(errors: &mut Vec<String>, config: &PaneConfig) {
    let engine = &config.engine;
    if !VERSION_RE.is_match(&engine.version) {
        errors.push(format!(
            "engine.version = {:?} is not MAJOR.MINOR.PATCH",
            engine.version
        ));
    }
    if let Some(url) = &engine.url {
        if !URL_RE.is_match(url) {
            errors.push(format!("engine.url = {url:?} is not a URL"));
        }
    }
    if engine.source == SourceKind::Local && engine.path.is_none() {
        errors.push("engine.path is required when engine.source = \"local\"".into());
    }
}
