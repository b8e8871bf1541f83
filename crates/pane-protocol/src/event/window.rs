use std::path::PathBuf;

use pane_common::{PhysicalPosition, PhysicalSize, Theme};
use serde::{Deserialize, Serialize};

use super::input::{
    AxisId, ElementState, KeyboardInput, ModifiersState, MouseButton, MouseScrollDelta, Touch,
    TouchPhase,
};
use super::DeviceId;

/// An occurrence addressed to one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "value",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum WindowEvent {
    /// New inner size, in physical pixels.
    Resized(PhysicalSize<u32>),
    /// New outer position, in physical pixels.
    Moved(PhysicalPosition<i32>),
    CloseRequested,
    Destroyed,
    DroppedFile(PathBuf),
    HoveredFile(PathBuf),
    HoveredFileCancelled,
    ReceivedCharacter(char),
    Focused(bool),
    KeyboardInput {
        device_id: DeviceId,
        input: KeyboardInput,
        /// Generated by the engine (focus changes), not by a key press.
        is_synthetic: bool,
    },
    ModifiersChanged(ModifiersState),
    CursorMoved {
        device_id: DeviceId,
        position: PhysicalPosition<f64>,
    },
    CursorEntered {
        device_id: DeviceId,
    },
    CursorLeft {
        device_id: DeviceId,
    },
    MouseWheel {
        device_id: DeviceId,
        delta: MouseScrollDelta,
        phase: TouchPhase,
    },
    MouseInput {
        device_id: DeviceId,
        state: ElementState,
        button: MouseButton,
    },
    TouchpadPressure {
        device_id: DeviceId,
        /// 0.0 to 1.0.
        pressure: f32,
        /// Click level.
        stage: i64,
    },
    AxisMotion {
        device_id: DeviceId,
        axis: AxisId,
        value: f64,
    },
    Touch(Touch),
    /// The scale factor changed. Logical values derived from the old factor
    /// are stale from here on.
    ScaleFactorChanged {
        scale_factor: f64,
        new_inner_size: PhysicalSize<u32>,
    },
    ThemeChanged(Theme),
}

impl WindowEvent {
    /// Wire tag, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            WindowEvent::Resized(_) => "resized",
            WindowEvent::Moved(_) => "moved",
            WindowEvent::CloseRequested => "closeRequested",
            WindowEvent::Destroyed => "destroyed",
            WindowEvent::DroppedFile(_) => "droppedFile",
            WindowEvent::HoveredFile(_) => "hoveredFile",
            WindowEvent::HoveredFileCancelled => "hoveredFileCancelled",
            WindowEvent::ReceivedCharacter(_) => "receivedCharacter",
            WindowEvent::Focused(_) => "focused",
            WindowEvent::KeyboardInput { .. } => "keyboardInput",
            WindowEvent::ModifiersChanged(_) => "modifiersChanged",
            WindowEvent::CursorMoved { .. } => "cursorMoved",
            WindowEvent::CursorEntered { .. } => "cursorEntered",
            WindowEvent::CursorLeft { .. } => "cursorLeft",
            WindowEvent::MouseWheel { .. } => "mouseWheel",
            WindowEvent::MouseInput { .. } => "mouseInput",
            WindowEvent::TouchpadPressure { .. } => "touchpadPressure",
            WindowEvent::AxisMotion { .. } => "axisMotion",
            WindowEvent::Touch(_) => "touch",
            WindowEvent::ScaleFactorChanged { .. } => "scaleFactorChanged",
            WindowEvent::ThemeChanged(_) => "themeChanged",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::keycode::VirtualKeyCode;

    #[test]
    fn unit_variant_has_no_value() {
        assert_eq!(
            serde_json::to_string(&WindowEvent::CloseRequested).unwrap(),
            r#"{"type":"closeRequested"}"#
        );
    }

    #[test]
    fn struct_variant_fields_are_camel_case() {
        let event = WindowEvent::ScaleFactorChanged {
            scale_factor: 2.0,
            new_inner_size: PhysicalSize::new(640, 480),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "scaleFactorChanged");
        assert_eq!(json["value"]["scaleFactor"], 2.0);
        assert_eq!(json["value"]["newInnerSize"]["width"], 640);
    }

    #[test]
    fn keyboard_input_decodes() {
        let text = r#"{"type":"keyboardInput","value":{"deviceId":3,"input":{"scancode":1,"state":"pressed","virtualKeycode":"Escape"},"isSynthetic":false}}"#;
        let event: WindowEvent = serde_json::from_str(text).unwrap();
        match event {
            WindowEvent::KeyboardInput {
                device_id, input, ..
            } => {
                assert_eq!(device_id, DeviceId(3));
                assert_eq!(input.virtual_keycode, Some(VirtualKeyCode::Escape));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn newtype_variants() {
        let moved: WindowEvent =
            serde_json::from_str(r#"{"type":"moved","value":{"x":-10,"y":20}}"#).unwrap();
        assert_eq!(moved, WindowEvent::Moved(PhysicalPosition::new(-10, 20)));

        let ch: WindowEvent =
            serde_json::from_str(r#"{"type":"receivedCharacter","value":"é"}"#).unwrap();
        assert_eq!(ch, WindowEvent::ReceivedCharacter('é'));

        let theme: WindowEvent =
            serde_json::from_str(r#"{"type":"themeChanged","value":"dark"}"#).unwrap();
        assert_eq!(theme, WindowEvent::ThemeChanged(Theme::Dark));
        assert_eq!(theme.kind(), "themeChanged");
    }

    #[test]
    fn unknown_tag_is_an_error() {
        assert!(serde_json::from_str::<WindowEvent>(r#"{"type":"teleported"}"#).is_err());
    }
}
