//! Typed operation payloads.
//!
//! Every window operation addresses its target through `rid`. Field names
//! are camelCase on the wire.

use pane_common::{CursorIcon, Position, ResourceId, Size, UserAttentionType};
use serde::{Deserialize, Serialize};

/// Payload of every operation that only names its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RidArgs {
    pub rid: ResourceId,
}

/// `window_new`: the initial inner size and frame buffer size, in physical
/// pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowNewArgs {
    pub event_loop: ResourceId,
    pub width: u32,
    pub height: u32,
}

/// `window_set_outer_position`, `window_set_ime_position`,
/// `window_set_cursor_position`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionArgs {
    pub rid: ResourceId,
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeArgs {
    pub rid: ResourceId,
    pub size: Size,
}

/// Min/max inner size. An absent size clears the bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeBoundArgs {
    pub rid: ResourceId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleArgs {
    pub rid: ResourceId,
    pub title: String,
}

macro_rules! flag_args {
    ($($name:ident { $field:ident } => $wire:literal;)+) => {
        $(
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
            pub struct $name {
                pub rid: ResourceId,
                #[serde(rename = $wire)]
                pub $field: bool,
            }
        )+
    };
}

flag_args! {
    VisibleArgs { visible } => "visible";
    ResizableArgs { resizable } => "resizable";
    MinimizedArgs { minimized } => "minimized";
    MaximizedArgs { maximized } => "maximized";
    DecorationsArgs { decorations } => "decorations";
    AlwaysOnTopArgs { always_on_top } => "alwaysOnTop";
    CursorGrabArgs { grab } => "grab";
}

/// `window_set_window_icon`. `rgba` is width×height×4 bytes. An empty
/// buffer with zero dimensions removes the icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconArgs {
    pub rid: ResourceId,
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// `window_request_user_attention`. No type cancels a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAttentionArgs {
    pub rid: ResourceId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_type: Option<UserAttentionType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorIconArgs {
    pub rid: ResourceId,
    pub cursor: CursorIcon,
}

/// `window_resize_frame`: new frame buffer dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSizeArgs {
    pub rid: ResourceId,
    pub width: u32,
    pub height: u32,
}
