use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EventLoopConfig {
    /// Delay between steps.
    pub poll_interval_ms: u64,
}

impl Default for EventLoopConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 33,
        }
    }
}

impl EventLoopConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
