//! Rendering components.
//!
//! This module contains the drawing surface abstraction and the frame
//! renderer that rasterizes the projected globe into it.

mod buffer;
mod frame;

pub use buffer::FrameBuffer;
pub use frame::{FrameRenderer, FrameStats, Glyphs};

use std::io;

/// Size of a character grid in columns and rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Whether `(row, col)` is a valid cell.
    pub fn contains(&self, row: u16, col: u16) -> bool {
        row < self.height && col < self.width
    }
}

/// A character grid that frames are drawn into.
///
/// Writing outside [`Canvas::viewport`] is not allowed; the renderer clips
/// before calling [`Canvas::write_glyph`].
pub trait Canvas {
    /// Dimensions of the drawable area.
    fn viewport(&self) -> Viewport;

    /// Blank every cell.
    fn clear(&mut self) -> io::Result<()>;

    /// Put `glyph` at `(row, col)`, replacing whatever was there.
    fn write_glyph(&mut self, row: u16, col: u16, glyph: char) -> io::Result<()>;

    /// Present the current contents.
    fn flush(&mut self) -> io::Result<()>;
}
