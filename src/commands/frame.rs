//! Single-frame command handler

use std::io::{self, Write};

use anyhow::Result;

use earthspin::cli::FrameArgs;
use earthspin::{Config, FrameBuffer};

/// Render one frame into memory and print it.
pub fn handle(mut config: Config, args: &FrameArgs) -> Result<()> {
    super::apply_view_args(&mut config, &args.view)?;

    let globe = config.globe();
    let mut buffer = FrameBuffer::new(config.viewport());
    let stats = config
        .renderer()
        .render(&mut buffer, &globe, args.angle_x, args.angle_y)?;
    tracing::debug!(drawn = stats.drawn, clipped = stats.clipped, "frame rendered");

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", buffer)?;
    stdout.flush()?;
    Ok(())
}
