use serde::{Deserialize, Serialize};

use super::input::{AxisId, ButtonId, ElementState, KeyboardInput, MouseScrollDelta};

/// Raw hardware activity not tied to a window. Delivered regardless of
/// focus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "value",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum DeviceEvent {
    Added,
    Removed,
    /// Unfiltered pointer motion, `[x, y]` in device units.
    MouseMotion {
        delta: (f64, f64),
    },
    MouseWheel {
        delta: MouseScrollDelta,
    },
    Motion {
        axis: AxisId,
        value: f64,
    },
    Button {
        button: ButtonId,
        state: ElementState,
    },
    Key(KeyboardInput),
    Text {
        codepoint: char,
    },
}

impl DeviceEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            DeviceEvent::Added => "added",
            DeviceEvent::Removed => "removed",
            DeviceEvent::MouseMotion { .. } => "mouseMotion",
            DeviceEvent::MouseWheel { .. } => "mouseWheel",
            DeviceEvent::Motion { .. } => "motion",
            DeviceEvent::Button { .. } => "button",
            DeviceEvent::Key(_) => "key",
            DeviceEvent::Text { .. } => "text",
        }
    }
}
