//! Engine-side window state.
//!
//! All geometry is kept in physical pixels. Logical inputs are converted
//! with the window's scale factor at the moment they arrive.

use std::collections::HashSet;

use pane_common::{
    CursorIcon, PhysicalPosition, PhysicalSize, Position, ResourceId, Size, UserAttentionType,
};
use pane_protocol::event::{ElementState, MouseButton, WindowEvent, WindowId};

use crate::errors::{EngineError, EngineResult};
use crate::frame::{self, Frame};

/// Height of the title bar a decorated window carries above its client area.
pub const TITLEBAR_HEIGHT: u32 = 28;

/// Size of the single simulated display.
pub const SCREEN_SIZE: PhysicalSize<u32> = PhysicalSize::new(1920, 1080);

#[derive(Debug)]
pub struct WindowState {
    pub id: WindowId,
    pub event_loop: ResourceId,
    pub scale_factor: f64,
    pub outer_position: PhysicalPosition<i32>,
    pub inner_size: PhysicalSize<u32>,
    pub min_inner_size: Option<PhysicalSize<u32>>,
    pub max_inner_size: Option<PhysicalSize<u32>>,
    pub title: String,
    pub visible: bool,
    pub resizable: bool,
    pub minimized: bool,
    pub maximized: bool,
    pub decorations: bool,
    pub always_on_top: bool,
    pub icon: Option<PhysicalSize<u32>>,
    pub ime_position: PhysicalPosition<i32>,
    pub attention: Option<UserAttentionType>,
    pub cursor_icon: CursorIcon,
    pub cursor_position: Option<PhysicalPosition<i32>>,
    pub cursor_grab: bool,
    pub cursor_visible: bool,
    pressed_buttons: HashSet<MouseButton>,
    /// Geometry to restore when leaving the maximized state.
    restore: Option<(PhysicalPosition<i32>, PhysicalSize<u32>)>,
    pub redraw_pending: bool,
    pub frame: Frame,
}

impl WindowState {
    /// A window whose client area matches `frame`.
    pub fn new(
        id: WindowId,
        event_loop: ResourceId,
        frame: Frame,
        outer_position: PhysicalPosition<i32>,
    ) -> Self {
        let size = frame.size();
        Self {
            id,
            event_loop,
            scale_factor: 1.0,
            outer_position,
            inner_size: size,
            min_inner_size: None,
            max_inner_size: None,
            title: String::new(),
            visible: true,
            resizable: true,
            minimized: false,
            maximized: false,
            decorations: true,
            always_on_top: false,
            icon: None,
            ime_position: PhysicalPosition::new(0, 0),
            attention: None,
            cursor_icon: CursorIcon::Default,
            cursor_position: None,
            cursor_grab: false,
            cursor_visible: true,
            pressed_buttons: HashSet::new(),
            restore: None,
            // A new window always gets one redraw.
            redraw_pending: true,
            frame,
        }
    }

    fn titlebar(&self) -> u32 {
        if self.decorations {
            TITLEBAR_HEIGHT
        } else {
            0
        }
    }

    pub fn inner_position(&self) -> PhysicalPosition<i32> {
        let titlebar = i32::try_from(self.titlebar()).unwrap_or(i32::MAX);
        PhysicalPosition::new(
            self.outer_position.x,
            self.outer_position.y.saturating_add(titlebar),
        )
    }

    pub fn outer_size(&self) -> PhysicalSize<u32> {
        PhysicalSize::new(
            self.inner_size.width,
            self.inner_size.height.saturating_add(self.titlebar()),
        )
    }

    fn clamp(&self, size: PhysicalSize<u32>) -> PhysicalSize<u32> {
        let mut width = size.width;
        let mut height = size.height;
        if let Some(min) = self.min_inner_size {
            width = width.max(min.width);
            height = height.max(min.height);
        }
        if let Some(max) = self.max_inner_size {
            width = width.min(max.width);
            height = height.min(max.height);
        }
        PhysicalSize::new(width, height)
    }

    /// Apply a new inner size, honouring the bounds. Returns the `resized`
    /// event if the size actually changed.
    pub fn resize(&mut self, size: PhysicalSize<u32>) -> Option<WindowEvent> {
        let size = self.clamp(size);
        if size == self.inner_size {
            return None;
        }
        self.inner_size = size;
        self.redraw_pending = true;
        Some(WindowEvent::Resized(size))
    }

    pub fn set_inner_size(&mut self, size: Size) -> Option<WindowEvent> {
        self.resize(size.to_physical(self.scale_factor))
    }

    pub fn set_min_inner_size(&mut self, size: Option<Size>) -> Option<WindowEvent> {
        self.min_inner_size = size.map(|s| s.to_physical(self.scale_factor));
        self.resize(self.inner_size)
    }

    pub fn set_max_inner_size(&mut self, size: Option<Size>) -> Option<WindowEvent> {
        self.max_inner_size = size.map(|s| s.to_physical(self.scale_factor));
        self.resize(self.inner_size)
    }

    pub fn move_to(&mut self, position: PhysicalPosition<i32>) -> Option<WindowEvent> {
        if position == self.outer_position {
            return None;
        }
        self.outer_position = position;
        Some(WindowEvent::Moved(position))
    }

    pub fn set_outer_position(&mut self, position: Position) -> Option<WindowEvent> {
        self.move_to(position.to_physical(self.scale_factor))
    }

    /// Maximize onto the simulated screen or restore the previous geometry.
    pub fn set_maximized(&mut self, maximized: bool) -> Vec<WindowEvent> {
        if maximized == self.maximized {
            return Vec::new();
        }
        self.maximized = maximized;
        let (position, size) = if maximized {
            self.restore = Some((self.outer_position, self.inner_size));
            let size = PhysicalSize::new(
                SCREEN_SIZE.width,
                SCREEN_SIZE.height.saturating_sub(self.titlebar()),
            );
            (PhysicalPosition::new(0, 0), size)
        } else {
            match self.restore.take() {
                Some(geometry) => geometry,
                None => return Vec::new(),
            }
        };
        self.move_to(position)
            .into_iter()
            .chain(self.resize(size))
            .collect()
    }

    pub fn set_decorations(&mut self, decorations: bool) {
        self.decorations = decorations;
    }

    pub fn set_window_icon(&mut self, rgba: &[u8], width: u32, height: u32) -> EngineResult<()> {
        if rgba.is_empty() && width == 0 && height == 0 {
            self.icon = None;
            return Ok(());
        }
        let expected = frame::rgba_len("icon", width, height)?;
        if rgba.len() != expected {
            return Err(EngineError::new(format!(
                "invalid icon: {width}x{height} needs {expected} bytes of rgba, got {}",
                rgba.len()
            )));
        }
        self.icon = Some(PhysicalSize::new(width, height));
        Ok(())
    }

    pub fn set_cursor_position(&mut self, position: Position) -> EngineResult<()> {
        let position = position.to_physical(self.scale_factor);
        let inside = position.x >= 0
            && position.y >= 0
            && i64::from(position.x) < i64::from(self.inner_size.width)
            && i64::from(position.y) < i64::from(self.inner_size.height);
        if !inside {
            return Err(EngineError::new(format!(
                "cursor position ({}, {}) is outside the window",
                position.x, position.y
            )));
        }
        self.cursor_position = Some(position);
        Ok(())
    }

    /// Start a window-manager drag. Only valid while a mouse button is held
    /// over the window.
    pub fn drag_window(&self) -> EngineResult<()> {
        if self.pressed_buttons.is_empty() {
            return Err(EngineError::new(
                "cannot drag window: no mouse button is pressed",
            ));
        }
        Ok(())
    }

    /// Change the DPI. Returns `scaleFactorChanged` followed by `resized` when
    /// the physical size changes with it.
    pub fn change_scale_factor(&mut self, scale_factor: f64) -> Vec<WindowEvent> {
        let logical = self.inner_size.to_logical(self.scale_factor);
        self.scale_factor = scale_factor;
        let new_inner_size = logical.to_physical(scale_factor);
        let mut events = vec![WindowEvent::ScaleFactorChanged {
            scale_factor,
            new_inner_size,
        }];
        events.extend(self.resize(new_inner_size));
        events
    }

    /// Track OS activity that affects window state. Returns whether the
    /// window was destroyed.
    pub fn observe(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::MouseInput { state, button, .. } => match state {
                ElementState::Pressed => {
                    self.pressed_buttons.insert(*button);
                }
                ElementState::Released => {
                    self.pressed_buttons.remove(button);
                }
            },
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_position = Some(PhysicalPosition::new(
                    position.x.round() as i32,
                    position.y.round() as i32,
                ));
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor_position = None;
                self.pressed_buttons.clear();
            }
            WindowEvent::Focused(false) => self.pressed_buttons.clear(),
            WindowEvent::Resized(size) => {
                self.inner_size = *size;
                self.redraw_pending = true;
            }
            WindowEvent::Moved(position) => self.outer_position = *position,
            WindowEvent::Destroyed => return true,
            _ => {}
        }
        false
    }
}
