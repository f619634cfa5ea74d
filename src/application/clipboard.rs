//! Clipboard adapter
//!
//! Thin pass-through in front of a [`ClipboardBackend`] that enforces the
//! adapter's own preconditions and classifies backend failures.

use thiserror::Error;
use tracing::debug;

use super::ports::{BackendError, ClipboardBackend};

/// Errors from clipboard adapter operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("data to copy is empty")]
    EmptyData,

    #[error("clipboard is unavailable: {0}")]
    Unavailable(String),

    #[error("{0}")]
    Backend(String),
}

impl From<BackendError> for ClipboardError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Unavailable(reason) => ClipboardError::Unavailable(reason),
            BackendError::Failed(message) => ClipboardError::Backend(message),
        }
    }
}

/// Adapter over an OS clipboard backend
pub struct ClipboardAdapter<B: ClipboardBackend> {
    backend: B,
}

impl<B: ClipboardBackend> ClipboardAdapter<B> {
    /// Wrap a backend
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Get the wrapped backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Name of the wrapped backend
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Copy text to the clipboard.
    ///
    /// Whitespace-only text is rejected without touching the backend.
    pub fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        if text.trim().is_empty() {
            return Err(ClipboardError::EmptyData);
        }

        debug!(backend = self.backend.name(), bytes = text.len(), "writing clipboard");
        self.backend.write(text).map_err(ClipboardError::from)
    }

    /// Read text from the clipboard.
    pub fn paste(&self) -> Result<String, ClipboardError> {
        debug!(backend = self.backend.name(), "reading clipboard");
        let text = self.backend.read()?;
        debug!(bytes = text.len(), "clipboard read");
        Ok(text)
    }

    /// Whether the clipboard can be used on this host
    pub fn is_available(&self) -> bool {
        self.backend.is_supported()
    }
}
