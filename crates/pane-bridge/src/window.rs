//! Typed per-window facade.
//!
//! Each method maps to exactly one operation. Nothing engine-owned is cached
//! here: geometry and the scale factor are fetched on every call, since the
//! engine may change them between steps.

use pane_common::{
    CursorIcon, Handle, LogicalPosition, LogicalSize, PhysicalPosition, PhysicalSize, Position,
    Result, Size, UserAttentionType,
};
use pane_protocol::args::{
    AlwaysOnTopArgs, CursorGrabArgs, CursorIconArgs, DecorationsArgs, FrameSizeArgs, IconArgs,
    MaximizedArgs, MinimizedArgs, PositionArgs, ResizableArgs, RidArgs, SizeArgs, SizeBoundArgs,
    TitleArgs, UserAttentionArgs, VisibleArgs, WindowNewArgs,
};
use pane_protocol::{Op, WindowId};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::bridge::Bridge;
use crate::event_loop::EventLoop;

#[derive(Debug, Clone)]
pub struct Window {
    bridge: Bridge,
    handle: Handle,
}

impl Window {
    /// Open a window on `event_loop` with a `width`×`height` frame buffer.
    pub fn new(event_loop: &EventLoop, width: u32, height: u32) -> Result<Self> {
        let parent = event_loop.handle();
        let bridge = event_loop.bridge().clone();
        let handle = bridge.create(
            Op::WindowNew,
            Some(parent),
            &WindowNewArgs {
                event_loop: parent.rid(),
                width,
                height,
            },
        )?;
        debug!(handle = %handle, event_loop = %parent, width, height, "window created");
        Ok(Self { bridge, handle })
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    fn rid(&self) -> RidArgs {
        RidArgs {
            rid: self.handle.rid(),
        }
    }

    fn query<T: DeserializeOwned>(&self, op: Op) -> Result<T> {
        self.bridge.call(self.handle, op, &self.rid())
    }

    fn send<A: Serialize>(&self, op: Op, args: &A) -> Result<()> {
        self.bridge.call(self.handle, op, args)
    }

    /// The identifier carried by events addressed to this window.
    pub fn id(&self) -> Result<WindowId> {
        self.query(Op::WindowId)
    }

    pub fn scale_factor(&self) -> Result<f64> {
        self.query(Op::WindowScaleFactor)
    }

    pub fn request_redraw(&self) -> Result<()> {
        self.send(Op::WindowRequestRedraw, &self.rid())
    }

    pub fn inner_position(&self) -> Result<PhysicalPosition<i32>> {
        self.query(Op::WindowInnerPosition)
    }

    pub fn outer_position(&self) -> Result<PhysicalPosition<i32>> {
        self.query(Op::WindowOuterPosition)
    }

    /// Outer position in logical units at the current scale factor.
    pub fn logical_outer_position(&self) -> Result<LogicalPosition> {
        let position = self.outer_position()?;
        Ok(position.to_logical(self.scale_factor()?))
    }

    pub fn set_outer_position(&self, position: impl Into<Position>) -> Result<()> {
        let args = PositionArgs {
            rid: self.handle.rid(),
            position: position.into(),
        };
        self.send(Op::WindowSetOuterPosition, &args)
    }

    pub fn inner_size(&self) -> Result<PhysicalSize<u32>> {
        self.query(Op::WindowInnerSize)
    }

    pub fn outer_size(&self) -> Result<PhysicalSize<u32>> {
        self.query(Op::WindowOuterSize)
    }

    /// Inner size in logical units at the current scale factor.
    pub fn logical_inner_size(&self) -> Result<LogicalSize> {
        let size = self.inner_size()?;
        Ok(size.to_logical(self.scale_factor()?))
    }

    pub fn set_inner_size(&self, size: impl Into<Size>) -> Result<()> {
        let args = SizeArgs {
            rid: self.handle.rid(),
            size: size.into(),
        };
        self.send(Op::WindowSetInnerSize, &args)
    }

    /// `None` removes the bound.
    pub fn set_min_inner_size(&self, size: Option<Size>) -> Result<()> {
        let args = SizeBoundArgs {
            rid: self.handle.rid(),
            size,
        };
        self.send(Op::WindowSetMinInnerSize, &args)
    }

    /// `None` removes the bound.
    pub fn set_max_inner_size(&self, size: Option<Size>) -> Result<()> {
        let args = SizeBoundArgs {
            rid: self.handle.rid(),
            size,
        };
        self.send(Op::WindowSetMaxInnerSize, &args)
    }

    pub fn set_title(&self, title: &str) -> Result<()> {
        let args = TitleArgs {
            rid: self.handle.rid(),
            title: title.to_owned(),
        };
        self.send(Op::WindowSetTitle, &args)
    }

    pub fn set_visible(&self, visible: bool) -> Result<()> {
        let args = VisibleArgs {
            rid: self.handle.rid(),
            visible,
        };
        self.send(Op::WindowSetVisible, &args)
    }

    pub fn set_resizable(&self, resizable: bool) -> Result<()> {
        let args = ResizableArgs {
            rid: self.handle.rid(),
            resizable,
        };
        self.send(Op::WindowSetResizable, &args)
    }

    pub fn set_minimized(&self, minimized: bool) -> Result<()> {
        let args = MinimizedArgs {
            rid: self.handle.rid(),
            minimized,
        };
        self.send(Op::WindowSetMinimized, &args)
    }

    pub fn set_maximized(&self, maximized: bool) -> Result<()> {
        let args = MaximizedArgs {
            rid: self.handle.rid(),
            maximized,
        };
        self.send(Op::WindowSetMaximized, &args)
    }

    pub fn is_maximized(&self) -> Result<bool> {
        self.query(Op::WindowIsMaximized)
    }

    pub fn set_decorations(&self, decorations: bool) -> Result<()> {
        let args = DecorationsArgs {
            rid: self.handle.rid(),
            decorations,
        };
        self.send(Op::WindowSetDecorations, &args)
    }

    pub fn set_always_on_top(&self, always_on_top: bool) -> Result<()> {
        let args = AlwaysOnTopArgs {
            rid: self.handle.rid(),
            always_on_top,
        };
        self.send(Op::WindowSetAlwaysOnTop, &args)
    }

    /// Set the icon from `width`×`height` RGBA8 pixels, or clear it with
    /// `None`.
    pub fn set_window_icon(&self, icon: Option<(&[u8], u32, u32)>) -> Result<()> {
        let (rgba, width, height) = icon.unwrap_or_default();
        let args = IconArgs {
            rid: self.handle.rid(),
            rgba: rgba.to_vec(),
            width,
            height,
        };
        self.send(Op::WindowSetWindowIcon, &args)
    }

    pub fn set_ime_position(&self, position: impl Into<Position>) -> Result<()> {
        let args = PositionArgs {
            rid: self.handle.rid(),
            position: position.into(),
        };
        self.send(Op::WindowSetImePosition, &args)
    }

    /// `None` cancels an outstanding request.
    pub fn request_user_attention(&self, request_type: Option<UserAttentionType>) -> Result<()> {
        let args = UserAttentionArgs {
            rid: self.handle.rid(),
            request_type,
        };
        self.send(Op::WindowRequestUserAttention, &args)
    }

    pub fn set_cursor_icon(&self, cursor: CursorIcon) -> Result<()> {
        let args = CursorIconArgs {
            rid: self.handle.rid(),
            cursor,
        };
        self.send(Op::WindowSetCursorIcon, &args)
    }

    pub fn set_cursor_position(&self, position: impl Into<Position>) -> Result<()> {
        let args = PositionArgs {
            rid: self.handle.rid(),
            position: position.into(),
        };
        self.send(Op::WindowSetCursorPosition, &args)
    }

    pub fn set_cursor_grab(&self, grab: bool) -> Result<()> {
        let args = CursorGrabArgs {
            rid: self.handle.rid(),
            grab,
        };
        self.send(Op::WindowSetCursorGrab, &args)
    }

    pub fn set_cursor_visible(&self, visible: bool) -> Result<()> {
        let args = VisibleArgs {
            rid: self.handle.rid(),
            visible,
        };
        self.send(Op::WindowSetCursorVisible, &args)
    }

    /// Start a window move. Only valid while a mouse button is held.
    pub fn drag_window(&self) -> Result<()> {
        self.send(Op::WindowDragWindow, &self.rid())
    }

    /// Copy `rgba` into the frame buffer. The slice is not retained.
    pub fn draw_frame(&self, rgba: &[u8]) -> Result<()> {
        self.bridge
            .call_with_raw(self.handle, Op::WindowDrawFrame, &self.rid(), rgba)
    }

    pub fn render_frame(&self) -> Result<()> {
        self.send(Op::WindowRenderFrame, &self.rid())
    }

    /// Reallocate the frame buffer. Its contents are cleared.
    pub fn resize_frame(&self, width: u32, height: u32) -> Result<()> {
        let args = FrameSizeArgs {
            rid: self.handle.rid(),
            width,
            height,
        };
        self.send(Op::WindowResizeFrame, &args)
    }

    /// A copy of the current frame buffer.
    pub fn view_frame(&self) -> Result<Vec<u8>> {
        self.bridge
            .call_for_raw(self.handle, Op::WindowViewFrame, &self.rid())
    }
}
