//! 3D geometry for the globe.
//!
//! - `points`: static point set generation (sphere surface, city markers)
//! - `projection`: rotation and perspective projection to screen space

mod points;
mod projection;

pub use points::{
    default_markers, generate_overlay, generate_sphere, lat_lon_to_xyz, Globe, Marker,
};
pub use projection::{project, Projection};

/// A point in 3D space. Globe points lie on the unit sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// A projected screen position (column `x`, row `y`).
///
/// Coordinates may fall outside the viewport; callers clip before drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point2D {
    pub x: i32,
    pub y: i32,
}

impl Point2D {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
