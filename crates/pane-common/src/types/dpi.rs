//! Physical and logical coordinates.
//!
//! Physical values are device pixels; logical values are scaled by the
//! owning window's scale factor. The scale factor is engine-owned and can
//! change at any time (`scaleFactorChanged`), so conversions always take it
//! as an argument instead of remembering one.

use serde::{Deserialize, Serialize};

/// Whether `scale_factor` is usable for conversions (finite and > 0).
pub fn validate_scale_factor(scale_factor: f64) -> bool {
    scale_factor.is_sign_positive() && scale_factor.is_normal()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PhysicalPosition<P> {
    pub x: P,
    pub y: P,
}

impl<P> PhysicalPosition<P> {
    pub const fn new(x: P, y: P) -> Self {
        Self { x, y }
    }
}

impl PhysicalPosition<i32> {
    pub fn to_logical(self, scale_factor: f64) -> LogicalPosition {
        LogicalPosition::new(
            f64::from(self.x) / scale_factor,
            f64::from(self.y) / scale_factor,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LogicalPosition {
    pub x: f64,
    pub y: f64,
}

impl LogicalPosition {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_physical(self, scale_factor: f64) -> PhysicalPosition<i32> {
        PhysicalPosition::new(
            (self.x * scale_factor).round() as i32,
            (self.y * scale_factor).round() as i32,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PhysicalSize<P> {
    pub width: P,
    pub height: P,
}

impl<P> PhysicalSize<P> {
    pub const fn new(width: P, height: P) -> Self {
        Self { width, height }
    }
}

impl PhysicalSize<u32> {
    pub fn to_logical(self, scale_factor: f64) -> LogicalSize {
        LogicalSize::new(
            f64::from(self.width) / scale_factor,
            f64::from(self.height) / scale_factor,
        )
    }

    /// Number of bytes in an RGBA8 buffer of this size, or `None` if that
    /// does not fit in `usize`.
    pub fn rgba_len(self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(4)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LogicalSize {
    pub width: f64,
    pub height: f64,
}

impl LogicalSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn to_physical(self, scale_factor: f64) -> PhysicalSize<u32> {
        PhysicalSize::new(
            (self.width * scale_factor).round() as u32,
            (self.height * scale_factor).round() as u32,
        )
    }
}

/// A position that's either physical or logical.
///
/// On the wire: `{"physical": {"x", "y"}}` or `{"logical": {"x", "y"}}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Position {
    Physical(PhysicalPosition<i32>),
    Logical(LogicalPosition),
}

impl Position {
    pub fn to_physical(self, scale_factor: f64) -> PhysicalPosition<i32> {
        match self {
            Position::Physical(position) => position,
            Position::Logical(position) => position.to_physical(scale_factor),
        }
    }

    pub fn to_logical(self, scale_factor: f64) -> LogicalPosition {
        match self {
            Position::Physical(position) => position.to_logical(scale_factor),
            Position::Logical(position) => position,
        }
    }
}

impl From<PhysicalPosition<i32>> for Position {
    fn from(position: PhysicalPosition<i32>) -> Self {
        Position::Physical(position)
    }
}

impl From<LogicalPosition> for Position {
    fn from(position: LogicalPosition) -> Self {
        Position::Logical(position)
    }
}

/// A size that's either physical or logical.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Size {
    Physical(PhysicalSize<u32>),
    Logical(LogicalSize),
}

impl Size {
    pub fn to_physical(self, scale_factor: f64) -> PhysicalSize<u32> {
        match self {
            Size::Physical(size) => size,
            Size::Logical(size) => size.to_physical(scale_factor),
        }
    }

    pub fn to_logical(self, scale_factor: f64) -> LogicalSize {
        match self {
            Size::Physical(size) => size.to_logical(scale_factor),
            Size::Logical(size) => size,
        }
    }
}

impl From<PhysicalSize<u32>> for Size {
    fn from(size: PhysicalSize<u32>) -> Self {
        Size::Physical(size)
    }
}

impl From<LogicalSize> for Size {
    fn from(size: LogicalSize) -> Self {
        Size::Logical(size)
    }
}
