//! In-memory character grid.

use std::fmt;
use std::io;

use super::{Canvas, Viewport};

/// A fixed-size grid of characters, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    viewport: Viewport,
    cells: Vec<char>,
}

impl FrameBuffer {
    pub const BLANK: char = ' ';

    pub fn new(viewport: Viewport) -> Self {
        let len = viewport.width as usize * viewport.height as usize;
        Self {
            viewport,
            cells: vec![Self::BLANK; len],
        }
    }

    /// Character at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: u16, col: u16) -> Option<char> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// One row as a slice of cells.
    pub fn row(&self, row: u16) -> Option<&[char]> {
        if row >= self.viewport.height {
            return None;
        }
        let width = self.viewport.width as usize;
        let start = row as usize * width;
        Some(&self.cells[start..start + width])
    }

    /// Iterate over rows as strings.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.viewport.height)
            .filter_map(move |r| self.row(r).map(|cells| cells.iter().collect()))
    }

    /// Number of cells holding `glyph`.
    pub fn count(&self, glyph: char) -> usize {
        self.cells.iter().filter(|&&c| c == glyph).count()
    }

    fn index(&self, row: u16, col: u16) -> Option<usize> {
        if self.viewport.contains(row, col) {
            Some(row as usize * self.viewport.width as usize + col as usize)
        } else {
            None
        }
    }
}

impl Canvas for FrameBuffer {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn clear(&mut self) -> io::Result<()> {
        self.cells.fill(Self::BLANK);
        Ok(())
    }

    fn write_glyph(&mut self, row: u16, col: u16, glyph: char) -> io::Result<()> {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = glyph;
                Ok(())
            }
            None => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("cell ({}, {}) outside {:?}", row, col, self.viewport),
            )),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Display for FrameBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
