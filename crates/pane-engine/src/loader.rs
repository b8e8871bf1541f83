//! Produces headless engines for a configured engine source.

use std::io;

use pane_common::{BridgeError, EngineLocation, EngineSource};
use pane_protocol::{Engine, EngineLoader};
use tracing::{debug, info};

use crate::engine::HeadlessEngine;
use crate::simulator::OsSimulator;

/// Loads a [`HeadlessEngine`] in place of the native library.
///
/// A local source must exist on disk; a remote source is accepted as is,
/// since there is nothing to download. Every engine produced by one loader
/// shares its [`OsSimulator`].
#[derive(Debug, Clone, Default)]
pub struct HeadlessLoader {
    os: OsSimulator,
}

impl HeadlessLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_simulator(os: OsSimulator) -> Self {
        Self { os }
    }

    /// Handle for injecting OS activity into loaded engines.
    pub fn simulator(&self) -> OsSimulator {
        self.os.clone()
    }
}

impl EngineLoader for HeadlessLoader {
    fn load(&self, source: &EngineSource) -> Result<Box<dyn Engine>, BridgeError> {
        match &source.location {
            EngineLocation::Local(path) => {
                if !path.exists() {
                    return Err(BridgeError::Io(io::Error::new(
                        io::ErrorKind::NotFound,
                        format!("engine not found at {}", path.display()),
                    )));
                }
            }
            EngineLocation::Remote { version, .. } => {
                debug!(version = %version, "remote engine source, nothing to fetch");
            }
        }
        info!(source = %source, "headless engine loaded");
        Ok(Box::new(HeadlessEngine::new(self.os.clone())))
    }
}
