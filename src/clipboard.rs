//! System clipboard access for share links and style sheets.
//!
//! Copying is best effort: a failure is logged and handed back to the caller
//! as a message, never as a fatal error.

/// Copies `text` to the system clipboard.
#[cfg(feature = "clipboard")]
pub fn copy_text(text: &str) -> Result<(), String> {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => {
            tracing::debug!(bytes = text.len(), "Copied to clipboard");
            Ok(())
        }
        Err(e) => {
            tracing::warn!(error = %e, "Clipboard copy failed");
            Err(format!("Failed to copy to clipboard: {e}"))
        }
    }
}

/// Copies `text` to the system clipboard.
#[cfg(not(feature = "clipboard"))]
pub fn copy_text(_text: &str) -> Result<(), String> {
    tracing::warn!("Clipboard support was not compiled in");
    Err("Clipboard support is disabled in this build".to_string())
}
