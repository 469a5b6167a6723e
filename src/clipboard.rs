//! System clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::error::{Error, Result};

pub trait Clipboard {
    fn write(&mut self, text: &str) -> Result<()>;
}

/// Clipboard backed by the host platform. Opened lazily on first write so a
/// missing display only matters when the user actually copies.
#[derive(Default)]
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn context(&mut self) -> Result<&mut ClipboardContext> {
        if self.ctx.is_none() {
            let ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;
            self.ctx = Some(ctx);
        }
        self.ctx
            .as_mut()
            .ok_or_else(|| Error::Clipboard("clipboard unavailable".to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        let ctx = self.context()?;
        ctx.set_contents(text.to_owned())
            .map_err(|e| Error::Clipboard(e.to_string()))?;

        // Some providers hand back a copy; don't leave it lying around.
        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        log::debug!("wrote {} chars to clipboard", text.chars().count());
        Ok(())
    }
}
