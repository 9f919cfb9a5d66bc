//! Rotation and perspective projection.

use super::{Point2D, Point3D};

/// Distance the camera sits in front of the globe center.
pub const DEFAULT_CAMERA_DISTANCE: f64 = 3.0;

/// Perspective projection onto a character grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Viewport width in columns
    pub width: u16,
    /// Viewport height in rows
    pub height: u16,
    /// Scale applied after the perspective divide
    pub fov: f64,
    /// Offset added to rotated depth before dividing
    pub camera_distance: f64,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            width: 80,
            height: 40,
            fov: 25.0,
            camera_distance: DEFAULT_CAMERA_DISTANCE,
        }
    }
}

impl Projection {
    pub fn new(width: u16, height: u16, fov: f64) -> Self {
        Self {
            width,
            height,
            fov,
            camera_distance: DEFAULT_CAMERA_DISTANCE,
        }
    }

    /// Rotate `point` and project it to screen coordinates.
    ///
    /// Rotates around the vertical axis by `angle_y` first, then around the
    /// horizontal axis by `angle_x` using the already rotated depth. The order
    /// matters: it defines the tumbling axis.
    ///
    /// Returns `None` when the depth plus camera distance is zero (the divide
    /// is undefined) or the result is not finite.
    pub fn project(&self, point: Point3D, angle_x: f64, angle_y: f64) -> Option<Point2D> {
        let (sin_y, cos_y) = angle_y.sin_cos();
        let (sin_x, cos_x) = angle_x.sin_cos();

        let x = point.x * cos_y - point.z * sin_y;
        let z = point.x * sin_y + point.z * cos_y;
        let y = point.y * cos_x - z * sin_x;
        let z = point.y * sin_x + z * cos_x;

        let depth = z + self.camera_distance;
        if depth.abs() < f64::EPSILON {
            return None;
        }

        let sx = x / depth * self.fov;
        let sy = y / depth * self.fov;
        if !sx.is_finite() || !sy.is_finite() {
            return None;
        }

        // Truncate the scaled offset, then add the integer half viewport
        Some(Point2D::new(
            (sx as i32).saturating_add(i32::from(self.width / 2)),
            (sy as i32).saturating_add(i32::from(self.height / 2)),
        ))
    }

    /// Whether a projected point lies inside `[0, width) × [0, height)`.
    pub fn contains(&self, point: Point2D) -> bool {
        point.x >= 0
            && point.y >= 0
            && point.x < i32::from(self.width)
            && point.y < i32::from(self.height)
    }
}

/// Project with the default camera distance.
pub fn project(
    point: Point3D,
    angle_x: f64,
    angle_y: f64,
    width: u16,
    height: u16,
    fov: f64,
) -> Option<Point2D> {
    Projection::new(width, height, fov).project(point, angle_x, angle_y)
}
