//! earthspin - a rotating ASCII wireframe Earth for the terminal
//!
//! The crate is split into a pure rendering core and thin terminal glue:
//!
//! - `geometry`: point generation and perspective projection
//! - `render`: frame rendering into a character canvas
//! - `animation`: fixed-interval animation loop with quit handling
//! - `terminal`: terminal driver trait and the crossterm implementation
//! - `config`: TOML configuration with serde defaults
//! - `logging`: tracing subscriber setup
//! - `cli`: command line definitions

pub mod animation;
pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod render;
pub mod terminal;

pub use animation::{Animation, RotationState, RunSummary, StopReason};
pub use config::Config;
pub use geometry::{Globe, Point2D, Point3D, Projection};
pub use render::{Canvas, FrameBuffer, FrameRenderer, FrameStats, Glyphs, Viewport};
pub use terminal::{CrosstermTerminal, TerminalDriver};
