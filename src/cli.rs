//! CLI definitions for earthspin
//!
//! Kept in the library so tests and tooling can inspect the command tree.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Version string with the git commit and build date.
#[cfg(not(feature = "release"))]
pub fn long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        " (",
        env!("VERGEN_GIT_SHA"),
        ", ",
        env!("EARTHSPIN_BUILD_DATE"),
        ")"
    )
}

/// Version string with the build date.
#[cfg(feature = "release")]
pub fn long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        " (",
        env!("EARTHSPIN_BUILD_DATE"),
        ")"
    )
}

/// Git commit the binary was built from, if known.
pub fn git_sha() -> Option<&'static str> {
    option_env!("VERGEN_GIT_SHA").filter(|sha| !sha.is_empty() && *sha != "unknown")
}

#[derive(Parser, Debug)]
#[command(name = "earthspin")]
#[command(version, long_version = long_version())]
#[command(about = "Spin an ASCII wireframe Earth in your terminal")]
#[command(
    long_about = "Spin an ASCII wireframe Earth in your terminal.\n\n\
    Renders a rotating point-cloud sphere with a few city markers using\n\
    perspective projection. Press 'q' to quit."
)]
pub struct Cli {
    /// Path to a config file (default: <config dir>/earthspin/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the animation (default)
    Run(RunArgs),

    /// Render a single frame to stdout
    #[command(long_about = "Render a single frame to stdout.\n\n\
    Does not need a terminal; useful for previews and scripting.")]
    Frame(FrameArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Overrides shared by `run` and `frame`.
#[derive(Args, Debug, Default, Clone)]
pub struct ViewArgs {
    /// Number of points on the sphere surface
    #[arg(long, value_name = "N")]
    pub points: Option<usize>,

    /// Field of view scale
    #[arg(long, value_name = "F")]
    pub fov: Option<f64>,

    /// Viewport width in columns
    #[arg(long, value_name = "COLS")]
    pub width: Option<u16>,

    /// Viewport height in rows
    #[arg(long, value_name = "ROWS")]
    pub height: Option<u16>,
}

#[derive(Args, Debug, Default, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Stop after this many frames (at least 1)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub frames: Option<u64>,

    /// Milliseconds to sleep between frames
    #[arg(long, value_name = "MS")]
    pub interval_ms: Option<u64>,
}

#[derive(Args, Debug, Default, Clone)]
pub struct FrameArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Rotation around the horizontal axis, in radians
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub angle_x: f64,

    /// Rotation around the vertical axis, in radians
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub angle_y: f64,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
}
