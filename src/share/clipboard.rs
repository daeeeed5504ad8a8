//! System clipboard access for copying share links.
//!
//! The clipboard is missing in SSH sessions and headless environments, so
//! every call returns a `Result` instead of panicking.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy `text` to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Clipboard not available")?;
    clipboard
        .set_text(text)
        .context("Failed to copy to clipboard")?;
    tracing::debug!(len = text.len(), "copied to clipboard");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_does_not_panic() {
        // The clipboard may or may not be available in CI
        if let Err(e) = copy_to_clipboard("https://lovecalc.app/?a=Alice&b=Bob") {
            assert!(e.to_string().contains("lipboard"));
        }
    }
}
