//! The closed event taxonomy produced by stepping an event loop.
//!
//! Every enum here is adjacently tagged (`{"type": ..., "value": ...}`) and
//! has no catch-all variant: an unrecognized tag fails to decode and is
//! reported as [`pane_common::ProtocolViolation::UnknownVariant`].

pub mod batch;
pub mod device;
pub mod input;
pub mod keycode;
pub mod window;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use batch::{EventBatch, Phase};
pub use device::DeviceEvent;
pub use input::{
    AxisId, ButtonId, ElementState, Force, KeyboardInput, ModifiersState, MouseButton,
    MouseScrollDelta, ScanCode, Touch, TouchPhase,
};
pub use keycode::VirtualKeyCode;
pub use window::WindowEvent;

/// Engine-assigned identity of a window, embedded in every event addressed
/// to it. Distinct from the handle used to dispatch operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(pub u64);

/// Why the event loop woke up. Timestamps are milliseconds since the
/// engine started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "value",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum StartCause {
    ResumeTimeReached {
        start: u64,
        requested_resume: u64,
    },
    WaitCancelled {
        start: u64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        requested_resume: Option<u64>,
    },
    Poll,
    /// First iteration of a new loop.
    Init,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "value",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum Event {
    NewEvents(StartCause),
    WindowEvent {
        window_id: WindowId,
        event: WindowEvent,
    },
    DeviceEvent {
        device_id: DeviceId,
        event: DeviceEvent,
    },
    UserEvent,
    Suspended,
    Resumed,
    MainEventsCleared,
    RedrawRequested {
        window_id: WindowId,
    },
    RedrawEventsCleared,
    /// Terminal. No further steps on this loop are meaningful.
    LoopDestroyed,
}

impl Event {
    /// The window this event concerns, if any.
    pub fn window_id(&self) -> Option<WindowId> {
        match self {
            Event::WindowEvent { window_id, .. } | Event::RedrawRequested { window_id } => {
                Some(*window_id)
            }
            _ => None,
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            Event::NewEvents(_) => Phase::NewEvents,
            Event::WindowEvent { .. }
            | Event::DeviceEvent { .. }
            | Event::UserEvent
            | Event::Suspended
            | Event::Resumed => Phase::Input,
            Event::MainEventsCleared => Phase::MainEventsCleared,
            Event::RedrawRequested { .. } => Phase::RedrawRequested,
            Event::RedrawEventsCleared => Phase::RedrawEventsCleared,
            Event::LoopDestroyed => Phase::LoopDestroyed,
        }
    }

    /// Wire tag, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::NewEvents(_) => "newEvents",
            Event::WindowEvent { .. } => "windowEvent",
            Event::DeviceEvent { .. } => "deviceEvent",
            Event::UserEvent => "userEvent",
            Event::Suspended => "suspended",
            Event::Resumed => "resumed",
            Event::MainEventsCleared => "mainEventsCleared",
            Event::RedrawRequested { .. } => "redrawRequested",
            Event::RedrawEventsCleared => "redrawEventsCleared",
            Event::LoopDestroyed => "loopDestroyed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{from_text, to_text};
    use pane_common::{PhysicalSize, ProtocolViolation};

    #[test]
    fn new_events_shape() {
        let event = Event::NewEvents(StartCause::Init);
        assert_eq!(
            serde_json::to_string(&event).unwrap(),
            r#"{"type":"newEvents","value":{"type":"init"}}"#
        );
    }

    #[test]
    fn wait_cancelled_omits_missing_resume() {
        let cause = StartCause::WaitCancelled {
            start: 12,
            requested_resume: None,
        };
        assert_eq!(
            serde_json::to_string(&cause).unwrap(),
            r#"{"type":"waitCancelled","value":{"start":12}}"#
        );
    }

    #[test]
    fn window_event_carries_large_window_id() {
        let event = Event::WindowEvent {
            window_id: WindowId(0x9E37_79B9_7F4A_7C15),
            event: WindowEvent::Resized(PhysicalSize::new(800, 600)),
        };
        let text = to_text(&event).unwrap();
        assert!(text.contains(&format!(r#""windowId":{}"#, 0x9E37_79B9_7F4A_7C15u64)));
        let back: Event = from_text(&text).unwrap();
        assert_eq!(back, event);
        assert_eq!(back.window_id(), Some(WindowId(0x9E37_79B9_7F4A_7C15)));
    }

    #[test]
    fn redraw_requested_names_its_window() {
        let event: Event =
            from_text(r#"{"type":"redrawRequested","value":{"windowId":7}}"#).unwrap();
        assert_eq!(event.window_id(), Some(WindowId(7)));
        assert_eq!(event.phase(), Phase::RedrawRequested);
    }

    #[test]
    fn unknown_event_tag_is_unknown_variant() {
        let err = from_text::<Event>(r#"{"type":"screenSaverStarted"}"#).unwrap_err();
        assert!(matches!(err, ProtocolViolation::UnknownVariant(_)), "{err:?}");

        let err = from_text::<Event>(
            r#"{"type":"windowEvent","value":{"windowId":1,"event":{"type":"teleported"}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ProtocolViolation::UnknownVariant(_)), "{err:?}");
    }

    #[test]
    fn window_id_display_is_hex() {
        assert_eq!(WindowId(255).to_string(), "00000000000000ff");
    }
}
