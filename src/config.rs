//! Configuration management
//!
//! Settings are read from `<config dir>/earthspin/config.toml`. Every field
//! has a default, so the file may be missing or only partially filled in.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::AnimationSettings;
use crate::error::ConfigError;
use crate::geometry::{default_markers, Globe, Marker, Projection};
use crate::render::{FrameRenderer, Glyphs, Viewport};

/// Largest accepted viewport, in cells (width x height)
pub const MAX_VIEWPORT_CELLS: usize = 1_000_000;

/// Largest accepted sphere point count
pub const MAX_SPHERE_POINTS: usize = 1_000_000;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub globe: GlobeConfig,
    pub view: ViewConfig,
    pub animation: AnimationConfig,
    pub glyphs: GlyphConfig,
}

/// Point set sizes and overlay markers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    /// Number of points on the sphere surface
    pub sphere_points: usize,
    /// Maximum number of overlay points; extra markers are dropped
    pub overlay_capacity: usize,
    /// Latitude/longitude markers drawn on top of the sphere
    pub markers: Vec<Marker>,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            sphere_points: 1000,
            overlay_capacity: 500,
            markers: default_markers(),
        }
    }
}

/// Viewport and camera
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub width: u16,
    pub height: u16,
    pub fov: f64,
    pub camera_distance: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        let projection = Projection::default();
        Self {
            width: projection.width,
            height: projection.height,
            fov: projection.fov,
            camera_distance: projection.camera_distance,
        }
    }
}

/// Rotation speed, frame pacing and quit key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub delta_x: f64,
    pub delta_y: f64,
    pub frame_interval_ms: u64,
    pub quit_key: char,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            delta_x: 0.01,
            delta_y: 0.02,
            frame_interval_ms: 50,
            quit_key: 'q',
        }
    }
}

/// Characters drawn for each point set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphConfig {
    pub sphere: char,
    pub overlay: char,
}

impl Default for GlyphConfig {
    fn default() -> Self {
        let glyphs = Glyphs::default();
        Self {
            sphere: glyphs.sphere,
            overlay: glyphs.overlay,
        }
    }
}

impl Config {
    /// Default config file location.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("earthspin").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults if absent.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load and validate a specific config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Reject values the renderer or loop cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.view.width == 0 || self.view.height == 0 {
            return Err(ConfigError::Invalid {
                field: "view.width/view.height",
                message: "viewport must be at least 1x1".to_string(),
            });
        }
        let cells = self.view.width as usize * self.view.height as usize;
        if cells > MAX_VIEWPORT_CELLS {
            return Err(ConfigError::Invalid {
                field: "view.width/view.height",
                message: format!(
                    "{}x{} is {} cells, the limit is {}",
                    self.view.width, self.view.height, cells, MAX_VIEWPORT_CELLS
                ),
            });
        }
        if self.globe.sphere_points > MAX_SPHERE_POINTS {
            return Err(ConfigError::Invalid {
                field: "globe.sphere_points",
                message: format!("must be at most {}", MAX_SPHERE_POINTS),
            });
        }
        finite("view.fov", self.view.fov)?;
        finite("view.camera_distance", self.view.camera_distance)?;
        finite("animation.delta_x", self.animation.delta_x)?;
        finite("animation.delta_y", self.animation.delta_y)?;
        if self.animation.frame_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "animation.frame_interval_ms",
                message: "must be greater than zero".to_string(),
            });
        }
        for marker in &self.globe.markers {
            if !marker.lat.is_finite() || !marker.lon.is_finite() {
                return Err(ConfigError::Invalid {
                    field: "globe.markers",
                    message: format!("marker '{}' has a non-finite coordinate", marker.name),
                });
            }
        }
        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.view.width, self.view.height)
    }

    pub fn projection(&self) -> Projection {
        Projection {
            width: self.view.width,
            height: self.view.height,
            fov: self.view.fov,
            camera_distance: self.view.camera_distance,
        }
    }

    pub fn glyphs(&self) -> Glyphs {
        Glyphs {
            sphere: self.glyphs.sphere,
            overlay: self.glyphs.overlay,
        }
    }

    pub fn renderer(&self) -> FrameRenderer {
        FrameRenderer::new(self.projection(), self.glyphs())
    }

    pub fn globe(&self) -> Globe {
        Globe::generate(&self.globe)
    }

    pub fn animation_settings(&self) -> AnimationSettings {
        AnimationSettings {
            delta_x: self.animation.delta_x,
            delta_y: self.animation.delta_y,
            frame_interval: Duration::from_millis(self.animation.frame_interval_ms),
            quit_key: self.animation.quit_key,
            max_frames: None,
        }
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            message: format!("{} is not a finite number", value),
        })
    }
}
