use anyhow::{Context, Result};

use super::intents::ShareTarget;

/// Open the share dialog for `target` in the user's default browser.
///
/// Returns the URL that was opened.
///
/// # Errors
/// Returns error if the intent URL can't be built or no browser is available
pub fn open_share_dialog(target: ShareTarget, text: &str, link: &str) -> Result<String> {
    let url = target.intent_url(text, link)?;
    tracing::debug!(%url, ?target, "opening share dialog");
    webbrowser::open(&url).with_context(|| format!("Failed to open browser for URL: {}", url))?;
    Ok(url)
}
