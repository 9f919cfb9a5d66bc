//! Animation state types.

/// Rotation angles in radians.
///
/// Angles only ever grow; they are fed to sin/cos so they are never wrapped.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationState {
    pub angle_x: f64,
    pub angle_y: f64,
}

impl RotationState {
    pub const fn new(angle_x: f64, angle_y: f64) -> Self {
        Self { angle_x, angle_y }
    }

    /// Advance both angles by one frame's deltas.
    pub fn advance(&mut self, delta_x: f64, delta_y: f64) {
        self.angle_x += delta_x;
        self.angle_y += delta_y;
    }
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The quit key was pressed
    QuitKey,
    /// The configured frame limit was reached
    FrameLimit,
    /// A termination signal was received
    Signal,
}

/// State of the animation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped(StopReason),
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Frames rendered
    pub frames: u64,
    /// Why the loop stopped
    pub reason: StopReason,
    /// Angles after the last advance
    pub rotation: RotationState,
}
