//! Raw mode RAII guard and single-key reads.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Guard that ensures raw mode is disabled when dropped.
pub struct RawModeGuard {
    was_enabled: bool,
}

impl RawModeGuard {
    /// Enable raw mode, returning a guard that will disable it on drop.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { was_enabled: true })
    }

    /// Disable raw mode early (also happens on drop).
    pub fn disable(&mut self) {
        if self.was_enabled {
            let _ = disable_raw_mode();
            self.was_enabled = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.disable();
    }
}

/// Wait for one key press. `None` timeout blocks until a key arrives;
/// otherwise returns `Ok(None)` when the timeout passes first.
pub fn read_key(timeout: Option<Duration>) -> io::Result<Option<KeyEvent>> {
    let _guard = RawModeGuard::new()?;
    loop {
        if let Some(t) = timeout
            && !event::poll(t)?
        {
            return Ok(None);
        }
        // Windows reports releases too; only act on presses.
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            return Ok(Some(key));
        }
        if timeout.is_some() {
            // A non-key event consumed part of the wait; let the caller
            // recompute the remaining time.
            return Ok(None);
        }
    }
}
