//! Subcommand handlers

pub mod config;
pub mod frame;
pub mod run;

use std::path::Path;

use anyhow::{Context, Result};

use earthspin::cli::ViewArgs;
use earthspin::Config;

/// Load the config from `path`, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Config::load().context("Failed to load config"),
    }
}

/// Apply command line overrides on top of the loaded config.
pub fn apply_view_args(config: &mut Config, args: &ViewArgs) -> Result<()> {
    if let Some(points) = args.points {
        config.globe.sphere_points = points;
    }
    if let Some(fov) = args.fov {
        config.view.fov = fov;
    }
    if let Some(width) = args.width {
        config.view.width = width;
    }
    if let Some(height) = args.height {
        config.view.height = height;
    }
    config.validate().context("Invalid command line option")?;
    Ok(())
}
