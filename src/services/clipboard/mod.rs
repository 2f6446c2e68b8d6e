// Clipboard service
// Thin wrapper over the system clipboard for the copy-log action

use thiserror::Error;

/// Failure to hand text to the system clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(#[from] arboard::Error),
}

/// Copy `text` to the system clipboard.
///
/// A fresh clipboard handle is opened per call; on some platforms a held
/// handle can lock the clipboard against other applications.
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
