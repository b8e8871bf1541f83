//! The RGBA8 pixel buffer behind each window.

use pane_common::PhysicalSize;

use crate::errors::{EngineError, EngineResult};

/// Largest accepted width or height of a frame or icon, in pixels.
pub const MAX_FRAME_DIMENSION: u32 = 16_384;

/// Byte length of a `width`×`height` RGBA8 buffer. Zero and oversized
/// dimensions are rejected before anything is allocated.
pub fn rgba_len(what: &str, width: u32, height: u32) -> EngineResult<usize> {
    if width == 0 || height == 0 {
        return Err(EngineError::new(format!(
            "{what} size must be non-zero, got {width}x{height}"
        )));
    }
    if width > MAX_FRAME_DIMENSION || height > MAX_FRAME_DIMENSION {
        return Err(EngineError::new(format!(
            "{what} size {width}x{height} exceeds {MAX_FRAME_DIMENSION}x{MAX_FRAME_DIMENSION}"
        )));
    }
    PhysicalSize::new(width, height)
        .rgba_len()
        .ok_or_else(|| EngineError::new(format!("{what} size {width}x{height} is too large")))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    size: PhysicalSize<u32>,
    pixels: Vec<u8>,
    /// Number of times the buffer has been presented.
    presented: u64,
}

impl Frame {
    pub fn new(width: u32, height: u32) -> EngineResult<Self> {
        let len = rgba_len("frame", width, height)?;
        Ok(Self {
            size: PhysicalSize::new(width, height),
            pixels: vec![0; len],
            presented: 0,
        })
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn presented(&self) -> u64 {
        self.presented
    }

    /// Copy `rgba` into the buffer. The length must match exactly; a short
    /// or long buffer leaves the frame untouched.
    pub fn draw(&mut self, rgba: &[u8]) -> EngineResult<()> {
        if rgba.len() != self.pixels.len() {
            return Err(EngineError::new(format!(
                "frame buffer must be {}x{}x4 = {} bytes, got {}",
                self.size.width,
                self.size.height,
                self.pixels.len(),
                rgba.len()
            )));
        }
        self.pixels.copy_from_slice(rgba);
        Ok(())
    }

    /// Reallocate a zeroed buffer of the new size. A rejected size leaves
    /// the frame untouched.
    pub fn resize(&mut self, width: u32, height: u32) -> EngineResult<()> {
        let len = rgba_len("frame", width, height)?;
        self.size = PhysicalSize::new(width, height);
        self.pixels = vec![0; len];
        Ok(())
    }

    pub fn render(&mut self) {
        self.presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_requires_exact_length() {
        let mut frame = Frame::new(2, 2).unwrap();
        let err = frame.draw(&[1; 15]).unwrap_err();
        assert_eq!(err.to_string(), "frame buffer must be 2x2x4 = 16 bytes, got 15");
        assert_eq!(frame.pixels(), &[0; 16]);
        frame.draw(&[7; 16]).unwrap();
        assert_eq!(frame.pixels(), &[7; 16]);
    }

    #[test]
    fn resize_zero_fills() {
        let mut frame = Frame::new(1, 1).unwrap();
        frame.draw(&[9; 4]).unwrap();
        frame.resize(3, 1).unwrap();
        assert_eq!(frame.pixels(), &[0; 12]);
        assert_eq!(frame.size(), PhysicalSize::new(3, 1));
    }

    #[test]
    fn zero_and_oversized_sizes_are_rejected() {
        assert!(Frame::new(0, 10).is_err());
        let err = Frame::new(u32::MAX, u32::MAX).unwrap_err();
        assert_eq!(
            err.to_string(),
            "frame size 4294967295x4294967295 exceeds 16384x16384"
        );
        assert!(Frame::new(MAX_FRAME_DIMENSION, 1).is_ok());
    }

    #[test]
    fn rejected_resize_keeps_the_buffer() {
        let mut frame = Frame::new(1, 1).unwrap();
        frame.draw(&[5; 4]).unwrap();
        let err = frame.resize(0, 7).unwrap_err();
        assert_eq!(err.to_string(), "frame size must be non-zero, got 0x7");
        assert!(frame.resize(u32::MAX, u32::MAX).is_err());
        assert!(frame.resize(MAX_FRAME_DIMENSION + 1, 1).is_err());
        assert_eq!(frame.size(), PhysicalSize::new(1, 1));
        assert_eq!(frame.pixels(), &[5; 4]);
    }

    #[test]
    fn render_counts_presentations() {
        let mut frame = Frame::new(1, 1).unwrap();
        frame.render();
        frame.render();
        assert_eq!(frame.presented(), 2);
    }
}
