//! Clipboard access for the copy action.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::pass::Password;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CopyError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
    #[error("nothing to copy yet")]
    Empty,
}

/// Write-only clipboard capability supplied by the host.
pub trait Clipboard {
    fn write(&mut self, text: &str) -> Result<(), CopyError>;
}

/// The desktop clipboard via copypasta.
pub struct SystemClipboard {
    ctx: ClipboardContext,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, CopyError> {
        ClipboardContext::new()
            .map(|ctx| Self { ctx })
            .map_err(|e| CopyError::Unavailable(e.to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<(), CopyError> {
        self.ctx
            .set_contents(text.to_owned())
            .map_err(|e| CopyError::Write(e.to_string()))?;
        // Some backends hand back a copy on read; wipe it.
        if let Ok(mut echoed) = self.ctx.get_contents() {
            echoed.zeroize();
        }
        Ok(())
    }
}

/// Copy the current password, if there is one.
pub fn copy_password(
    clipboard: &mut dyn Clipboard,
    password: Option<&Password>,
) -> Result<(), CopyError> {
    match password {
        Some(p) if !p.is_empty() => clipboard.write(p.as_str()),
        _ => Err(CopyError::Empty),
    }
}
