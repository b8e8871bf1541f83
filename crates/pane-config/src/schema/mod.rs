//! Configuration schema types for Pane.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod engine;
mod event_loop;
mod system;
mod window;

pub use engine::*;
pub use event_loop::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaneConfig {
    pub engine: EngineConfig,
    pub logging: LoggingConfig,
    pub window: WindowConfig,
    pub event_loop: EventLoopConfig,
}
