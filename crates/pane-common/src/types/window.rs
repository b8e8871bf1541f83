//! Window appearance enums shared by the facade and the engine.

use serde::{Deserialize, Serialize};

/// Describes the appearance of the mouse cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CursorIcon {
    /// The platform-dependent default cursor.
    #[default]
    Default,
    /// A simple crosshair.
    Crosshair,
    /// A hand (often used to indicate links in web browsers).
    Hand,
    Arrow,
    /// Indicates something is to be moved.
    Move,
    /// Indicates text that may be selected or edited.
    Text,
    /// Program busy indicator.
    Wait,
    /// Help indicator (often rendered as a "?").
    Help,
    /// Program busy, but the user may still interact with it.
    Progress,
    /// Cursor showing that something cannot be done.
    NotAllowed,
    ContextMenu,
    Cell,
    VerticalText,
    Alias,
    Copy,
    NoDrop,
    /// Indicates something can be grabbed.
    Grab,
    /// Indicates something is grabbed.
    Grabbing,
    AllScroll,
    ZoomIn,
    ZoomOut,
    EResize,
    NResize,
    NeResize,
    NwResize,
    SResize,
    SeResize,
    SwResize,
    WResize,
    EwResize,
    NsResize,
    NeswResize,
    NwseResize,
    ColResize,
    RowResize,
}

/// How a request for user attention manifests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserAttentionType {
    /// Bounces the dock icon / flashes the window until focused.
    Critical,
    /// Bounces the dock icon once / flashes the taskbar button.
    Informational,
}

/// The OS theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Theme {
    Light,
    Dark,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_icon_wire_names() {
        assert_eq!(serde_json::to_string(&CursorIcon::Hand).unwrap(), "\"hand\"");
        assert_eq!(
            serde_json::to_string(&CursorIcon::NwseResize).unwrap(),
            "\"nwseResize\""
        );
        let icon: CursorIcon = serde_json::from_str("\"notAllowed\"").unwrap();
        assert_eq!(icon, CursorIcon::NotAllowed);
    }

    #[test]
    fn unknown_cursor_icon_is_rejected() {
        assert!(serde_json::from_str::<CursorIcon>("\"spinner\"").is_err());
    }

    #[test]
    fn attention_and_theme_wire_names() {
        assert_eq!(
            serde_json::to_string(&UserAttentionType::Informational).unwrap(),
            "\"informational\""
        );
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    }
}
