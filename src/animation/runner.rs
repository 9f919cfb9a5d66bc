//! The animation tick loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::event::KeyCode;

use super::state::{LoopState, RotationState, RunSummary, StopReason};
use crate::error::RenderError;
use crate::geometry::Globe;
use crate::render::FrameRenderer;
use crate::terminal::TerminalDriver;

/// Timing and input settings for the loop.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSettings {
    /// Added to `angle_x` after every frame
    pub delta_x: f64,
    /// Added to `angle_y` after every frame
    pub delta_y: f64,
    /// Fixed sleep between frames
    pub frame_interval: Duration,
    /// Key that stops the loop
    pub quit_key: char,
    /// Stop after this many frames
    pub max_frames: Option<u64>,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            delta_x: 0.01,
            delta_y: 0.02,
            frame_interval: Duration::from_millis(50),
            quit_key: 'q',
            max_frames: None,
        }
    }
}

/// Owns the globe, the renderer and the rotation policy.
///
/// Single-threaded: each tick renders, advances the angles, sleeps for the
/// fixed interval and polls one key without blocking.
pub struct Animation {
    globe: Globe,
    renderer: FrameRenderer,
    settings: AnimationSettings,
    start: RotationState,
    stop_flag: Option<Arc<AtomicBool>>,
}

impl Animation {
    pub fn new(globe: Globe, renderer: FrameRenderer, settings: AnimationSettings) -> Self {
        Self {
            globe,
            renderer,
            settings,
            start: RotationState::default(),
            stop_flag: None,
        }
    }

    /// Start from the given angles instead of zero.
    pub fn with_start(mut self, start: RotationState) -> Self {
        self.start = start;
        self
    }

    /// Stop at the next tick once `flag` becomes true (set from a signal handler).
    pub fn with_stop_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.stop_flag = Some(flag);
        self
    }

    pub fn settings(&self) -> &AnimationSettings {
        &self.settings
    }

    /// Run until stopped, then shut the terminal down exactly once.
    ///
    /// The terminal is shut down even when a tick fails; the tick error takes
    /// precedence over a shutdown error.
    pub fn run<T: TerminalDriver + ?Sized>(
        &self,
        terminal: &mut T,
    ) -> Result<RunSummary, RenderError> {
        let mut rotation = self.start;
        let mut frames = 0u64;

        tracing::info!(
            sphere = self.globe.sphere().len(),
            overlay = self.globe.overlay().len(),
            interval_ms = self.settings.frame_interval.as_millis() as u64,
            "animation started"
        );

        let outcome = self.run_ticks(terminal, &mut rotation, &mut frames);
        let shutdown = terminal.shutdown();

        let reason = outcome?;
        shutdown?;

        tracing::info!(frames, ?reason, "animation stopped");
        Ok(RunSummary {
            frames,
            reason,
            rotation,
        })
    }

    fn run_ticks<T: TerminalDriver + ?Sized>(
        &self,
        terminal: &mut T,
        rotation: &mut RotationState,
        frames: &mut u64,
    ) -> Result<StopReason, RenderError> {
        loop {
            match self.tick(terminal, rotation, frames)? {
                LoopState::Running => continue,
                LoopState::Stopped(reason) => return Ok(reason),
            }
        }
    }

    /// One tick: render, advance, throttle, poll.
    pub fn tick<T: TerminalDriver + ?Sized>(
        &self,
        terminal: &mut T,
        rotation: &mut RotationState,
        frames: &mut u64,
    ) -> Result<LoopState, RenderError> {
        if self.frame_limit_reached(*frames) {
            return Ok(LoopState::Stopped(StopReason::FrameLimit));
        }

        self.renderer
            .render(terminal, &self.globe, rotation.angle_x, rotation.angle_y)?;
        *frames += 1;

        rotation.advance(self.settings.delta_x, self.settings.delta_y);
        thread::sleep(self.settings.frame_interval);

        if let Some(key) = terminal.poll_key()? {
            if key == KeyCode::Char(self.settings.quit_key) {
                return Ok(LoopState::Stopped(StopReason::QuitKey));
            }
            tracing::trace!(?key, "ignored key");
        }

        if self.frame_limit_reached(*frames) {
            return Ok(LoopState::Stopped(StopReason::FrameLimit));
        }

        if let Some(flag) = &self.stop_flag {
            if flag.load(Ordering::Relaxed) {
                return Ok(LoopState::Stopped(StopReason::Signal));
            }
        }

        Ok(LoopState::Running)
    }

    fn frame_limit_reached(&self, frames: u64) -> bool {
        self.settings.max_frames.is_some_and(|limit| frames >= limit)
    }
}
