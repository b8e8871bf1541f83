//! Operation handlers.

use pane_protocol::args::{
    AlwaysOnTopArgs, CursorGrabArgs, CursorIconArgs, DecorationsArgs, FrameSizeArgs, IconArgs,
    MaximizedArgs, MinimizedArgs, PositionArgs, ResizableArgs, RidArgs, SizeArgs, SizeBoundArgs,
    TitleArgs, UserAttentionArgs, VisibleArgs, WindowNewArgs,
};
use pane_protocol::{from_text, to_wire, Op, RawChannel, WireValue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::engine::HeadlessEngine;
use crate::errors::{EngineError, EngineResult};

/// A successful result: the `ok` value and an optional raw attachment.
pub(crate) struct Reply {
    pub value: WireValue,
    pub raw: Option<Vec<u8>>,
}

impl Reply {
    fn unit() -> Self {
        Self {
            value: WireValue::Null,
            raw: None,
        }
    }

    fn value<T: Serialize>(value: &T) -> EngineResult<Self> {
        let value = to_wire(value).map_err(|e| EngineError::new(e.to_string()))?;
        Ok(Self { value, raw: None })
    }
}

fn args<T: DeserializeOwned>(op: Op, payload: &str) -> EngineResult<T> {
    from_text(payload).map_err(|e| EngineError::new(format!("invalid payload for {op}: {e}")))
}

impl HeadlessEngine {
    pub(crate) fn dispatch(
        &mut self,
        op: Op,
        payload: &str,
        raw: Option<&[u8]>,
    ) -> EngineResult<Reply> {
        debug!(op = %op, payload_len = payload.len(), raw_len = ?raw.map(<[u8]>::len), "dispatch");
        match (op.raw_channel(), raw) {
            (RawChannel::Request, None) => {
                return Err(EngineError::new(format!("{op} requires a raw attachment")));
            }
            (RawChannel::None | RawChannel::Response, Some(_)) => {
                return Err(EngineError::new(format!("{op} takes no raw attachment")));
            }
            _ => {}
        }

        match op {
            Op::EventLoopNew => Reply::value(&self.create_event_loop()?),
            Op::EventLoopStep => {
                let a: RidArgs = args(op, payload)?;
                let events = self.step(a.rid)?;
                debug!(rid = a.rid, event_count = events.len(), "step");
                Reply::value(&events)
            }
            Op::WindowNew => {
                let a: WindowNewArgs = args(op, payload)?;
                Reply::value(&self.create_window(a.event_loop, a.width, a.height)?)
            }
            Op::WindowId => {
                let a: RidArgs = args(op, payload)?;
                Reply::value(&self.table.window(a.rid)?.id)
            }
            Op::WindowScaleFactor => {
                let a: RidArgs = args(op, payload)?;
                Reply::value(&self.table.window(a.rid)?.scale_factor)
            }
            Op::WindowRequestRedraw => {
                let a: RidArgs = args(op, payload)?;
                self.table.window_mut(a.rid)?.redraw_pending = true;
                Ok(Reply::unit())
            }
            Op::WindowInnerPosition => {
                let a: RidArgs = args(op, payload)?;
                Reply::value(&self.table.window(a.rid)?.inner_position())
            }
            Op::WindowOuterPosition => {
                let a: RidArgs = args(op, payload)?;
                Reply::value(&self.table.window(a.rid)?.outer_position)
            }
            Op::WindowSetOuterPosition => {
                let a: PositionArgs = args(op, payload)?;
                let moved = self.table.window_mut(a.rid)?.set_outer_position(a.position);
                self.emit(a.rid, moved)?;
                Ok(Reply::unit())
            }
            Op::WindowInnerSize => {
                let a: RidArgs = args(op, payload)?;
                Reply::value(&self.table.window(a.rid)?.inner_size)
            }
            Op::WindowOuterSize => {
                let a: RidArgs = args(op, payload)?;
                Reply::value(&self.table.window(a.rid)?.outer_size())
            }
            Op::WindowSetInnerSize => {
                let a: SizeArgs = args(op, payload)?;
                let resized = self.table.window_mut(a.rid)?.set_inner_size(a.size);
                self.emit(a.rid, resized)?;
                Ok(Reply::unit())
            }
            Op::WindowSetMinInnerSize => {
                let a: SizeBoundArgs = args(op, payload)?;
                let resized = self.table.window_mut(a.rid)?.set_min_inner_size(a.size);
                self.emit(a.rid, resized)?;
                Ok(Reply::unit())
            }
            Op::WindowSetMaxInnerSize => {
                let a: SizeBoundArgs = args(op, payload)?;
                let resized = self.table.window_mut(a.rid)?.set_max_inner_size(a.size);
                self.emit(a.rid, resized)?;
                Ok(Reply::unit())
            }
            Op::WindowSetTitle => {
                let a: TitleArgs = args(op, payload)?;
                self.table.window_mut(a.rid)?.title = a.title;
                Ok(Reply::unit())
            }
            Op::WindowSetVisible => {
                let a: VisibleArgs = args(op, payload)?;
                self.table.window_mut(a.rid)?.visible = a.visible;
                Ok(Reply::unit())
            }
            Op::WindowSetResizable => {
                let a: ResizableArgs = args(op, payload)?;
                self.table.window_mut(a.rid)?.resizable = a.resizable;
                Ok(Reply::unit())
            }
            Op::WindowSetMinimized => {
                let a: MinimizedArgs = args(op, payload)?;
                self.table.window_mut(a.rid)?.minimized = a.minimized;
                Ok(Reply::unit())
            }
            Op::WindowSetMaximized => {
                let a: MaximizedArgs = args(op, payload)?;
                let events = self.table.window_mut(a.rid)?.set_maximized(a.maximized);
                self.emit(a.rid, events)?;
                Ok(Reply::unit())
            }
            Op::WindowIsMaximized => {
                let a: RidArgs = args(op, payload)?;
                Reply::value(&self.table.window(a.rid)?.maximized)
            }
            Op::WindowSetDecorations => {
                let a: DecorationsArgs = args(op, payload)?;
                self.table.window_mut(a.rid)?.set_decorations(a.decorations);
                Ok(Reply::unit())
            }
            Op::WindowSetAlwaysOnTop => {
                let a: AlwaysOnTopArgs = args(op, payload)?;
                self.table.window_mut(a.rid)?.always_on_top = a.always_on_top;
                Ok(Reply::unit())
            }
            Op::WindowSetWindowIcon => {
                let a: IconArgs = args(op, payload)?;
                self.table
                    .window_mut(a.rid)?
                    .set_window_icon(&a.rgba, a.width, a.height)?;
                Ok(Reply::unit())
            }
            Op::WindowSetImePosition => {
                let a: PositionArgs = args(op, payload)?;
                let window = self.table.window_mut(a.rid)?;
                window.ime_position = a.position.to_physical(window.scale_factor);
                Ok(Reply::unit())
            }
            Op::WindowRequestUserAttention => {
                let a: UserAttentionArgs = args(op, payload)?;
                self.table.window_mut(a.rid)?.attention = a.request_type;
                Ok(Reply::unit())
            }
            Op::WindowSetCursorIcon => {
                let a: CursorIconArgs = args(op, payload)?;
                self.table.window_mut(a.rid)?.cursor_icon = a.cursor;
                Ok(Reply::unit())
            }
            Op::WindowSetCursorPosition => {
                let a: PositionArgs = args(op, payload)?;
                self.table
                    .window_mut(a.rid)?
                    .set_cursor_position(a.position)?;
                Ok(Reply::unit())
            }
            Op::WindowSetCursorGrab => {
                let a: CursorGrabArgs = args(op, payload)?;
                self.table.window_mut(a.rid)?.cursor_grab = a.grab;
                Ok(Reply::unit())
            }
            Op::WindowSetCursorVisible => {
                let a: VisibleArgs = args(op, payload)?;
                self.table.window_mut(a.rid)?.cursor_visible = a.visible;
                Ok(Reply::unit())
            }
            Op::WindowDragWindow => {
                let a: RidArgs = args(op, payload)?;
                self.table.window(a.rid)?.drag_window()?;
                Ok(Reply::unit())
            }
            Op::WindowDrawFrame => {
                let a: RidArgs = args(op, payload)?;
                let rgba = raw.unwrap_or_default();
                self.table.window_mut(a.rid)?.frame.draw(rgba)?;
                Ok(Reply::unit())
            }
            Op::WindowRenderFrame => {
                let a: RidArgs = args(op, payload)?;
                self.table.window_mut(a.rid)?.frame.render();
                Ok(Reply::unit())
            }
            Op::WindowResizeFrame => {
                let a: FrameSizeArgs = args(op, payload)?;
                self.table
                    .window_mut(a.rid)?
                    .frame
                    .resize(a.width, a.height)?;
                Ok(Reply::unit())
            }
            Op::WindowViewFrame => {
                let a: RidArgs = args(op, payload)?;
                let pixels = self.table.window(a.rid)?.frame.pixels().to_vec();
                Ok(Reply {
                    value: WireValue::Null,
                    raw: Some(pixels),
                })
            }
        }
    }
}
