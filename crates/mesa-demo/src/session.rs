#![forbid(unsafe_code)]

//! Terminal session lifecycle guard.
//!
//! RAII wrapper around raw mode, the alternate screen, and cursor
//! visibility. Cleanup runs in [`Drop`] in reverse order of enabling, so
//! the terminal is restored on every exit path that unwinds, including
//! panics.

use std::io::{self, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

/// Guard holding the terminal in raw mode for the demo's lifetime.
#[derive(Debug)]
pub struct TerminalGuard {
    alt_screen: bool,
}

impl TerminalGuard {
    /// Enter raw mode, optionally switch to the alternate screen, and
    /// hide the cursor.
    pub fn enter(alt_screen: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut out = io::stdout();
        if alt_screen {
            if let Err(e) = execute!(out, EnterAlternateScreen) {
                // Undo raw mode before surfacing the error.
                let _ = disable_raw_mode();
                return Err(e);
            }
        }
        if let Err(e) = execute!(out, Hide) {
            if alt_screen {
                let _ = execute!(out, LeaveAlternateScreen);
            }
            let _ = disable_raw_mode();
            return Err(e);
        }
        Ok(Self { alt_screen })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Reverse order of enabling; errors are ignored because there is
        // nothing left to do with them during teardown.
        let mut out = io::stdout();
        let _ = execute!(out, Show);
        if self.alt_screen {
            let _ = execute!(out, LeaveAlternateScreen);
        }
        let _ = disable_raw_mode();
        let _ = out.flush();
    }
}
