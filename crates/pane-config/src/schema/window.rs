//! Defaults for windows opened by the `pane` binary.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial inner and frame buffer width, in physical pixels.
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 320,
            height: 240,
            title: "pane".into(),
        }
    }
}
