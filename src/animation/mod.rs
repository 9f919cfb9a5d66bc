//! Fixed-interval animation loop.
//!
//! - `state`: rotation angles and loop state types
//! - `runner`: the tick loop that renders, advances, throttles and polls

mod runner;
mod state;

pub use runner::{Animation, AnimationSettings};
pub use state::{LoopState, RotationState, RunSummary, StopReason};
