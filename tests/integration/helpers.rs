//! Shared test helpers: a recording fake terminal and CLI runner.

use std::collections::VecDeque;
use std::io;
use std::path::Path;

use assert_cmd::Command;
use crossterm::event::KeyCode;
use earthspin::error::TerminalError;
use earthspin::{Canvas, FrameBuffer, TerminalDriver, Viewport};

/// Fake terminal that records every glyph write and replays scripted keys.
pub struct SpyTerminal {
    pub buffer: FrameBuffer,
    pub writes: Vec<(u16, u16, char)>,
    pub frames: Vec<FrameBuffer>,
    pub shutdowns: usize,
    keys: VecDeque<Option<KeyCode>>,
}

impl SpyTerminal {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_keys(viewport, Vec::new())
    }

    pub fn with_keys(viewport: Viewport, keys: Vec<Option<KeyCode>>) -> Self {
        Self {
            buffer: FrameBuffer::new(viewport),
            writes: Vec::new(),
            frames: Vec::new(),
            shutdowns: 0,
            keys: keys.into(),
        }
    }
}

impl Canvas for SpyTerminal {
    fn viewport(&self) -> Viewport {
        self.buffer.viewport()
    }

    fn clear(&mut self) -> io::Result<()> {
        self.buffer.clear()
    }

    fn write_glyph(&mut self, row: u16, col: u16, glyph: char) -> io::Result<()> {
        self.writes.push((row, col, glyph));
        self.buffer.write_glyph(row, col, glyph)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.frames.push(self.buffer.clone());
        Ok(())
    }
}

impl TerminalDriver for SpyTerminal {
    fn poll_key(&mut self) -> Result<Option<KeyCode>, TerminalError> {
        Ok(self.keys.pop_front().flatten())
    }

    fn shutdown(&mut self) -> Result<(), TerminalError> {
        self.shutdowns += 1;
        Ok(())
    }
}

/// Command for the earthspin binary with an isolated config directory.
pub fn earthspin_cmd(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("earthspin").expect("earthspin binary should build");
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env_remove("EARTHSPIN_LOG");
    cmd
}
