//! Static point sets for the globe.
//!
//! Both sets are generated once at startup and never change afterwards.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::Point3D;
use crate::config::GlobeConfig;

/// A named latitude/longitude marker drawn on top of the sphere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Display name (only used for config readability and logging)
    #[serde(default)]
    pub name: String,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

impl Marker {
    pub fn new(name: &str, lat: f64, lon: f64) -> Self {
        Self {
            name: name.to_string(),
            lat,
            lon,
        }
    }
}

/// The built-in marker table: a handful of major cities.
pub fn default_markers() -> Vec<Marker> {
    vec![
        Marker::new("Germany", 51.1657, 10.4515),
        Marker::new("New York", 40.7128, -74.0060),
        Marker::new("Cape Town", -33.9249, 18.4241),
        Marker::new("Tokyo", 35.6895, 139.6917),
        Marker::new("Buenos Aires", -34.6037, -58.3816),
    ]
}

/// Place `count` points on the unit sphere using equal-step spherical angles.
///
/// Point `i` uses `theta = 2π·i/sqrt(count)` and `phi = acos(2·i/count − 1)`.
/// The spacing is only roughly even; it is kept as is so frames match the
/// reference output.
pub fn generate_sphere(count: usize) -> Vec<Point3D> {
    let n = count as f64;
    let step = n.sqrt();

    (0..count)
        .map(|i| {
            let i = i as f64;
            let theta = 2.0 * PI * i / step;
            let phi = (2.0 * i / n - 1.0).acos();
            Point3D::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin())
        })
        .collect()
}

/// Convert latitude/longitude in degrees to a point on the unit sphere.
///
/// Out-of-range angles are accepted and still land on the sphere.
pub fn lat_lon_to_xyz(lat: f64, lon: f64) -> Point3D {
    let rad_lat = lat.to_radians();
    let rad_lon = lon.to_radians();
    Point3D::new(
        rad_lat.cos() * rad_lon.cos(),
        rad_lat.sin(),
        rad_lat.cos() * rad_lon.sin(),
    )
}

/// Convert markers to overlay points, keeping input order.
///
/// Markers beyond `capacity` are dropped silently.
pub fn generate_overlay(markers: &[Marker], capacity: usize) -> Vec<Point3D> {
    markers
        .iter()
        .take(capacity)
        .map(|m| lat_lon_to_xyz(m.lat, m.lon))
        .collect()
}

/// Immutable point sets for one globe: sphere outline plus overlay markers.
#[derive(Debug, Clone)]
pub struct Globe {
    sphere: Vec<Point3D>,
    overlay: Vec<Point3D>,
}

impl Globe {
    /// Build both point sets from configuration.
    pub fn generate(config: &GlobeConfig) -> Self {
        let sphere = generate_sphere(config.sphere_points);
        let overlay = generate_overlay(&config.markers, config.overlay_capacity);

        if overlay.len() < config.markers.len() {
            tracing::warn!(
                markers = config.markers.len(),
                capacity = config.overlay_capacity,
                "overlay capacity too small, extra markers dropped"
            );
        }
        tracing::debug!(
            sphere = sphere.len(),
            overlay = overlay.len(),
            "generated globe point sets"
        );

        Self { sphere, overlay }
    }

    /// Build a globe from explicit point sets.
    pub fn from_points(sphere: Vec<Point3D>, overlay: Vec<Point3D>) -> Self {
        Self { sphere, overlay }
    }

    pub fn sphere(&self) -> &[Point3D] {
        &self.sphere
    }

    pub fn overlay(&self) -> &[Point3D] {
        &self.overlay
    }
}
