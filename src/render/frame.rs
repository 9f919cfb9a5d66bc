//! Frame rendering: project the globe and rasterize it into a canvas.

use crate::error::RenderError;
use crate::geometry::{Globe, Point2D, Point3D, Projection};

use super::{Canvas, Viewport};

/// Characters used for each point set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub sphere: char,
    pub overlay: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            sphere: 'o',
            overlay: 'x',
        }
    }
}

/// Per-frame counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Glyph writes issued to the canvas
    pub drawn: usize,
    /// Points that projected outside the viewport
    pub clipped: usize,
    /// Points skipped because the perspective divide was undefined
    pub degenerate: usize,
}

/// Draws a [`Globe`] for a given pair of rotation angles.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    projection: Projection,
    glyphs: Glyphs,
}

impl FrameRenderer {
    pub fn new(projection: Projection, glyphs: Glyphs) -> Self {
        Self { projection, glyphs }
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn glyphs(&self) -> Glyphs {
        self.glyphs
    }

    /// Render one frame.
    ///
    /// Clears the canvas, draws sphere points, then overlay points, then
    /// flushes. There is no depth test: the last write to a cell wins, so
    /// overlay glyphs always end up on top of sphere glyphs.
    pub fn render<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        globe: &Globe,
        angle_x: f64,
        angle_y: f64,
    ) -> Result<FrameStats, RenderError> {
        let viewport = canvas.viewport();
        let mut stats = FrameStats::default();

        canvas.clear()?;
        self.draw_points(
            canvas,
            viewport,
            globe.sphere(),
            self.glyphs.sphere,
            angle_x,
            angle_y,
            &mut stats,
        )?;
        self.draw_points(
            canvas,
            viewport,
            globe.overlay(),
            self.glyphs.overlay,
            angle_x,
            angle_y,
            &mut stats,
        )?;
        canvas.flush()?;

        if stats.degenerate > 0 {
            tracing::warn!(
                degenerate = stats.degenerate,
                "skipped points on the camera plane"
            );
        }
        tracing::trace!(
            angle_x,
            angle_y,
            drawn = stats.drawn,
            clipped = stats.clipped,
            "frame rendered"
        );

        Ok(stats)
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_points<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        viewport: Viewport,
        points: &[Point3D],
        glyph: char,
        angle_x: f64,
        angle_y: f64,
        stats: &mut FrameStats,
    ) -> Result<(), RenderError> {
        for &point in points {
            match self.projection.project(point, angle_x, angle_y) {
                None => stats.degenerate += 1,
                Some(cell) => match to_cell(cell, viewport) {
                    Some((row, col)) => {
                        canvas.write_glyph(row, col, glyph)?;
                        stats.drawn += 1;
                    }
                    None => stats.clipped += 1,
                },
            }
        }
        Ok(())
    }
}

/// Convert a projected point to `(row, col)` if it lies inside `viewport`.
fn to_cell(point: Point2D, viewport: Viewport) -> Option<(u16, u16)> {
    let col = u16::try_from(point.x).ok()?;
    let row = u16::try_from(point.y).ok()?;
    viewport.contains(row, col).then_some((row, col))
}
