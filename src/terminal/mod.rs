//! Terminal driver.
//!
//! The animation talks to the terminal only through [`TerminalDriver`], so the
//! loop can be driven by a fake in tests. [`CrosstermTerminal`] is the real
//! implementation.

mod tty;

pub use tty::CrosstermTerminal;

use crossterm::event::KeyCode;

use crate::error::TerminalError;
use crate::render::Canvas;

/// A terminal session the animation can draw into and read keys from.
pub trait TerminalDriver: Canvas {
    /// Read one pending key press without blocking.
    ///
    /// Returns `Ok(None)` immediately when no key is waiting.
    fn poll_key(&mut self) -> Result<Option<KeyCode>, TerminalError>;

    /// Restore the terminal to its original state.
    ///
    /// Must be safe to call more than once; only the first call has effect.
    fn shutdown(&mut self) -> Result<(), TerminalError>;
}
