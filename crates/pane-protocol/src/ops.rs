//! The closed set of operations a client can dispatch.
//!
//! Operation names are the stable wire identifiers; they only change
//! meaning together with [`PROTOCOL_VERSION`].

use std::fmt;

/// Version of the operation set and payload shapes.
pub const PROTOCOL_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    EventLoopNew,
    EventLoopStep,
    WindowNew,
    WindowId,
    WindowScaleFactor,
    WindowRequestRedraw,
    WindowInnerPosition,
    WindowOuterPosition,
    WindowSetOuterPosition,
    WindowInnerSize,
    WindowOuterSize,
    WindowSetInnerSize,
    WindowSetMinInnerSize,
    WindowSetMaxInnerSize,
    WindowSetTitle,
    WindowSetVisible,
    WindowSetResizable,
    WindowSetMinimized,
    WindowSetMaximized,
    WindowIsMaximized,
    WindowSetDecorations,
    WindowSetAlwaysOnTop,
    WindowSetWindowIcon,
    WindowSetImePosition,
    WindowRequestUserAttention,
    WindowSetCursorIcon,
    WindowSetCursorPosition,
    WindowSetCursorGrab,
    WindowSetCursorVisible,
    WindowDragWindow,
    WindowDrawFrame,
    WindowRenderFrame,
    WindowResizeFrame,
    WindowViewFrame,
}

/// Which side of a call carries a raw byte attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawChannel {
    None,
    /// The request carries raw bytes next to the payload.
    Request,
    /// The response carries raw bytes next to the envelope.
    Response,
}

struct OpInfo {
    op: Op,
    name: &'static str,
    raw: RawChannel,
}

const fn info(op: Op, name: &'static str) -> OpInfo {
    OpInfo {
        op,
        name,
        raw: RawChannel::None,
    }
}

const OPS: &[OpInfo] = &[
    info(Op::EventLoopNew, "event_loop_new"),
    info(Op::EventLoopStep, "event_loop_step"),
    info(Op::WindowNew, "window_new"),
    info(Op::WindowId, "window_id"),
    info(Op::WindowScaleFactor, "window_scale_factor"),
    info(Op::WindowRequestRedraw, "window_request_redraw"),
    info(Op::WindowInnerPosition, "window_inner_position"),
    info(Op::WindowOuterPosition, "window_outer_position"),
    info(Op::WindowSetOuterPosition, "window_set_outer_position"),
    info(Op::WindowInnerSize, "window_inner_size"),
    info(Op::WindowOuterSize, "window_outer_size"),
    info(Op::WindowSetInnerSize, "window_set_inner_size"),
    info(Op::WindowSetMinInnerSize, "window_set_min_inner_size"),
    info(Op::WindowSetMaxInnerSize, "window_set_max_inner_size"),
    info(Op::WindowSetTitle, "window_set_title"),
    info(Op::WindowSetVisible, "window_set_visible"),
    info(Op::WindowSetResizable, "window_set_resizable"),
    info(Op::WindowSetMinimized, "window_set_minimized"),
    info(Op::WindowSetMaximized, "window_set_maximized"),
    info(Op::WindowIsMaximized, "window_is_maximized"),
    info(Op::WindowSetDecorations, "window_set_decorations"),
    info(Op::WindowSetAlwaysOnTop, "window_set_always_on_top"),
    info(Op::WindowSetWindowIcon, "window_set_window_icon"),
    info(Op::WindowSetImePosition, "window_set_ime_position"),
    info(Op::WindowRequestUserAttention, "window_request_user_attention"),
    info(Op::WindowSetCursorIcon, "window_set_cursor_icon"),
    info(Op::WindowSetCursorPosition, "window_set_cursor_position"),
    info(Op::WindowSetCursorGrab, "window_set_cursor_grab"),
    info(Op::WindowSetCursorVisible, "window_set_cursor_visible"),
    info(Op::WindowDragWindow, "window_drag_window"),
    OpInfo {
        op: Op::WindowDrawFrame,
        name: "window_draw_frame",
        raw: RawChannel::Request,
    },
    info(Op::WindowRenderFrame, "window_render_frame"),
    info(Op::WindowResizeFrame, "window_resize_frame"),
    OpInfo {
        op: Op::WindowViewFrame,
        name: "window_view_frame",
        raw: RawChannel::Response,
    },
];

impl Op {
    pub const ALL: [Op; 34] = [
        Op::EventLoopNew,
        Op::EventLoopStep,
        Op::WindowNew,
        Op::WindowId,
        Op::WindowScaleFactor,
        Op::WindowRequestRedraw,
        Op::WindowInnerPosition,
        Op::WindowOuterPosition,
        Op::WindowSetOuterPosition,
        Op::WindowInnerSize,
        Op::WindowOuterSize,
        Op::WindowSetInnerSize,
        Op::WindowSetMinInnerSize,
        Op::WindowSetMaxInnerSize,
        Op::WindowSetTitle,
        Op::WindowSetVisible,
        Op::WindowSetResizable,
        Op::WindowSetMinimized,
        Op::WindowSetMaximized,
        Op::WindowIsMaximized,
        Op::WindowSetDecorations,
        Op::WindowSetAlwaysOnTop,
        Op::WindowSetWindowIcon,
        Op::WindowSetImePosition,
        Op::WindowRequestUserAttention,
        Op::WindowSetCursorIcon,
        Op::WindowSetCursorPosition,
        Op::WindowSetCursorGrab,
        Op::WindowSetCursorVisible,
        Op::WindowDragWindow,
        Op::WindowDrawFrame,
        Op::WindowRenderFrame,
        Op::WindowResizeFrame,
        Op::WindowViewFrame,
    ];

    fn info(self) -> &'static OpInfo {
        // OPS lists every variant in declaration order.
        &OPS[self as usize]
    }

    /// Stable wire name.
    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn raw_channel(self) -> RawChannel {
        self.info().raw
    }

    /// Resolve a wire name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Op> {
        OPS.iter().find(|entry| entry.name == name).map(|entry| entry.op)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
