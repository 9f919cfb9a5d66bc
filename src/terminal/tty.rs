//! Crossterm-backed terminal session.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{self, DisableLineWrap, EnableLineWrap, EnterAlternateScreen, LeaveAlternateScreen},
};

use super::TerminalDriver;
use crate::error::TerminalError;
use crate::render::{Canvas, FrameBuffer, Viewport};

/// A raw-mode, alternate-screen terminal session on stdout.
///
/// Frames are drawn into an in-memory [`FrameBuffer`] and written out in one
/// go on [`Canvas::flush`]. The session is restored by
/// [`TerminalDriver::shutdown`], or on drop if shutdown was never called.
pub struct CrosstermTerminal {
    stdout: Stdout,
    buffer: FrameBuffer,
    /// Rows the terminal can show; rows past this are not written
    visible_rows: u16,
    active: bool,
}

impl CrosstermTerminal {
    /// Acquire the terminal: raw mode (no echo), alternate screen, hidden cursor.
    ///
    /// Fails with [`TerminalError::Unavailable`] when stdout or stdin is not a
    /// terminal. Anything acquired before a failure is released before the
    /// error is returned.
    pub fn init(viewport: Viewport) -> Result<Self, TerminalError> {
        if !atty::is(atty::Stream::Stdout) {
            return Err(TerminalError::Unavailable {
                reason: "stdout is not a terminal".to_string(),
            });
        }
        if !atty::is(atty::Stream::Stdin) {
            return Err(TerminalError::Unavailable {
                reason: "stdin is not a terminal".to_string(),
            });
        }

        terminal::enable_raw_mode().map_err(|e| TerminalError::Unavailable {
            reason: format!("cannot enter raw mode: {}", e),
        })?;

        // From here on, dropping `session` restores the terminal
        let mut session = Self {
            stdout: io::stdout(),
            buffer: FrameBuffer::new(viewport),
            visible_rows: viewport.height,
            active: true,
        };
        execute!(
            session.stdout,
            EnterAlternateScreen,
            cursor::Hide,
            DisableLineWrap,
            terminal::Clear(terminal::ClearType::All)
        )?;

        match terminal::size() {
            Ok((cols, rows)) => {
                if cols < viewport.width || rows < viewport.height {
                    tracing::warn!(
                        cols,
                        rows,
                        width = viewport.width,
                        height = viewport.height,
                        "terminal smaller than viewport, output will be cut off"
                    );
                }
                // Some pseudo-terminals report 0x0
                if rows > 0 {
                    session.visible_rows = rows.min(viewport.height);
                }
            }
            Err(e) => tracing::debug!("could not query terminal size: {}", e),
        }
        tracing::debug!(?viewport, "terminal session acquired");

        Ok(session)
    }

    fn restore(&mut self) -> Result<(), TerminalError> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let screen = execute!(self.stdout, LeaveAlternateScreen, cursor::Show, EnableLineWrap);
        // Leave raw mode even if the screen could not be restored
        let raw = terminal::disable_raw_mode();
        screen?;
        raw?;

        tracing::debug!("terminal session released");
        Ok(())
    }
}

impl Canvas for CrosstermTerminal {
    fn viewport(&self) -> Viewport {
        self.buffer.viewport()
    }

    fn clear(&mut self) -> io::Result<()> {
        self.buffer.clear()
    }

    fn write_glyph(&mut self, row: u16, col: u16, glyph: char) -> io::Result<()> {
        self.buffer.write_glyph(row, col, glyph)
    }

    fn flush(&mut self) -> io::Result<()> {
        let output = compose_frame(&self.buffer, self.visible_rows);
        self.stdout.write_all(output.as_bytes())?;
        self.stdout.flush()
    }
}

/// Escape sequence that redraws the first `max_rows` rows of `buffer`.
///
/// Each row is written at an absolute cursor position. Rows the terminal
/// cannot show are skipped, since the terminal would clamp their cursor
/// move onto its last line.
fn compose_frame(buffer: &FrameBuffer, max_rows: u16) -> String {
    let viewport = buffer.viewport();
    let rows = max_rows.min(viewport.height) as usize;
    // Build output string to minimize syscalls
    let mut output = String::with_capacity((viewport.width as usize + 8) * rows);

    for (row, line) in buffer.lines().take(rows).enumerate() {
        // Move cursor to start of line, then overwrite the whole row
        output.push_str(&format!("\x1b[{};1H", row + 1));
        output.push_str(&line);
    }
    output
}

impl TerminalDriver for CrosstermTerminal {
    fn poll_key(&mut self) -> Result<Option<KeyCode>, TerminalError> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(Some(key.code));
                }
            }
        }
        Ok(None)
    }

    fn shutdown(&mut self) -> Result<(), TerminalError> {
        self.restore()
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::warn!("failed to restore terminal: {}", e);
        }
    }
}
