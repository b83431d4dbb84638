//! System clipboard bridge.

use anyhow::{Context, Result};

/// Places `text` on the system clipboard.
///
/// Fails when no clipboard provider is available (e.g. headless
/// sessions); callers treat this as a warning, not a fatal error.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("no clipboard provider available")?;
    clipboard
        .set_text(text.to_string())
        .context("failed to write to clipboard")?;
    Ok(())
}
