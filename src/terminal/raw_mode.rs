//! Raw mode RAII guard.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode, is_raw_mode_enabled};

use crate::error::{Error, Result};

/// Keeps the terminal in raw mode until released or dropped.
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    /// Enter raw mode. Nested guards leave an already-raw terminal alone.
    pub fn new() -> Result<Self> {
        if is_raw_mode_enabled().map_err(Error::Terminal)? {
            return Ok(Self { active: false });
        }
        enable_raw_mode().map_err(Error::Terminal)?;
        Ok(Self { active: true })
    }

    pub fn release(&mut self) {
        if self.active {
            let _ = disable_raw_mode();
            self.active = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.release();
    }
}
