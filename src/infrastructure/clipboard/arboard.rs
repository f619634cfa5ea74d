//! Cross-platform clipboard backend using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland). X11 and Wayland serve the
//! selection from the process that set it, so on Linux `write` keeps serving the
//! copied text and only returns once another client (usually a clipboard manager)
//! takes ownership of the selection.

use tracing::debug;

use crate::application::ports::{BackendError, ClipboardBackend};

/// Cross-platform clipboard backend using arboard
pub struct ArboardClipboard;

impl ArboardClipboard {
    /// Create a new arboard clipboard backend
    pub fn new() -> Self {
        Self
    }

    fn open() -> Result<arboard::Clipboard, BackendError> {
        arboard::Clipboard::new().map_err(|e| {
            debug!(error = %e, "failed to open clipboard");
            BackendError::Unavailable(e.to_string())
        })
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Map arboard errors onto the backend taxonomy
fn classify(err: arboard::Error) -> BackendError {
    match err {
        arboard::Error::ClipboardNotSupported => BackendError::Unavailable(err.to_string()),
        other => BackendError::Failed(other.to_string()),
    }
}

impl ClipboardBackend for ArboardClipboard {
    fn name(&self) -> &str {
        "arboard"
    }

    #[cfg(target_os = "linux")]
    fn write(&self, text: &str) -> Result<(), BackendError> {
        use arboard::SetExtLinux;

        let mut clipboard = Self::open()?;
        debug!(bytes = text.len(), "serving clipboard selection until it is taken over");
        clipboard.set().wait().text(text.to_owned()).map_err(classify)
    }

    #[cfg(not(target_os = "linux"))]
    fn write(&self, text: &str) -> Result<(), BackendError> {
        let mut clipboard = Self::open()?;
        clipboard.set_text(text).map_err(classify)
    }

    fn read(&self) -> Result<String, BackendError> {
        let mut clipboard = Self::open()?;
        clipboard.get_text().map_err(classify)
    }

    fn is_supported(&self) -> bool {
        arboard::Clipboard::new().is_ok()
    }
}
