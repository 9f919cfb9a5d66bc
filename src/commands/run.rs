//! Animation command handler

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use anyhow::{Context, Result};
use signal_hook::consts::{SIGHUP, SIGTERM};

use earthspin::cli::{git_sha, RunArgs};
use earthspin::{Animation, Config, CrosstermTerminal};

/// Signals that stop the animation at the next tick.
///
/// SIGINT is not listed: in raw mode Ctrl+C reaches the loop as a key press,
/// not as a signal.
const STOP_SIGNALS: [i32; 2] = [SIGTERM, SIGHUP];

/// Run the animation until the quit key, a frame limit, or a signal.
#[cfg(not(tarpaulin_include))]
pub fn handle(mut config: Config, args: &RunArgs) -> Result<()> {
    super::apply_view_args(&mut config, &args.view)?;
    if let Some(ms) = args.interval_ms {
        config.animation.frame_interval_ms = ms;
        config.validate().context("Invalid --interval-ms")?;
    }

    let mut settings = config.animation_settings();
    settings.max_frames = args.frames;

    let stop = Arc::new(AtomicBool::new(false));
    for signal in STOP_SIGNALS {
        signal_hook::flag::register(signal, Arc::clone(&stop))
            .with_context(|| format!("Failed to register handler for signal {}", signal))?;
    }

    tracing::debug!(sha = git_sha().unwrap_or("unknown"), "starting earthspin");

    let animation =
        Animation::new(config.globe(), config.renderer(), settings).with_stop_flag(stop);
    let mut terminal =
        CrosstermTerminal::init(config.viewport()).context("Cannot start the animation")?;

    let summary = animation.run(&mut terminal)?;
    tracing::info!(frames = summary.frames, reason = ?summary.reason, "done");
    Ok(())
}
