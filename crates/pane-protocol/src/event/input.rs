//! Keyboard, mouse and touch payloads shared by window and device events.

use pane_common::PhysicalPosition;
use serde::{Deserialize, Serialize};

use super::keycode::VirtualKeyCode;
use super::DeviceId;

/// Hardware-dependent keyboard scan code.
pub type ScanCode = u32;
/// Identifier of an analog axis on some device.
pub type AxisId = u32;
/// Identifier of a button on some device.
pub type ButtonId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementState {
    Pressed,
    Released,
}

/// Serialized as `"left"`, `"right"`, `"middle"` or `{"other": n}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum MouseScrollDelta {
    /// Lines or rows, `[horizontal, vertical]`. Positive is away from the
    /// user or rightwards.
    LineDelta(f32, f32),
    PixelDelta(PhysicalPosition<f64>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TouchPhase {
    Started,
    Moved,
    Ended,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModifiersState {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub logo: bool,
}

impl ModifiersState {
    pub fn is_empty(&self) -> bool {
        !(self.shift || self.ctrl || self.alt || self.logo)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyboardInput {
    pub scancode: ScanCode,
    pub state: ElementState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_keycode: Option<VirtualKeyCode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "value",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum Force {
    Calibrated {
        force: f64,
        max_possible_force: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        altitude_angle: Option<f64>,
    },
    /// 0.0 to 1.0, relative to the device maximum.
    Normalized(f64),
}

impl Force {
    /// Force in the 0.0..=1.0 range regardless of how the platform
    /// reported it.
    pub fn normalized(&self) -> f64 {
        match *self {
            Force::Calibrated {
                force,
                max_possible_force,
                altitude_angle,
            } => {
                let force = match altitude_angle {
                    Some(angle) => force / angle.sin(),
                    None => force,
                };
                force / max_possible_force
            }
            Force::Normalized(force) => force,
        }
    }
}

/// One finger on a touch screen. `id` is unique while the finger is down
/// and may be reused after `ended`; it routinely exceeds the safe-integer
/// range and travels through the big-integer codec.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Touch {
    pub device_id: DeviceId,
    pub phase: TouchPhase,
    pub location: PhysicalPosition<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force: Option<Force>,
    pub id: u64,
}
