//! Clipboard backend port interface

use thiserror::Error;

/// Errors reported by a clipboard backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// No clipboard mechanism exists on this host (missing helper, no display, ...)
    #[error("{0}")]
    Unavailable(String),

    /// The mechanism exists but the operation failed
    #[error("{0}")]
    Failed(String),
}

/// Port for an OS-level clipboard capability
pub trait ClipboardBackend {
    /// Short backend name used in status output and logs
    fn name(&self) -> &str;

    /// Replace the clipboard contents with `text`.
    fn write(&self, text: &str) -> Result<(), BackendError>;

    /// Read the current clipboard contents as text.
    fn read(&self) -> Result<String, BackendError>;

    /// Whether this backend can work on the current host.
    ///
    /// Must not fail and must not modify the clipboard.
    fn is_supported(&self) -> bool;
}

/// Blanket implementation for boxed backend types
impl ClipboardBackend for Box<dyn ClipboardBackend> {
    fn name(&self) -> &str {
        self.as_ref().name()
    }

    fn write(&self, text: &str) -> Result<(), BackendError> {
        self.as_ref().write(text)
    }

    fn read(&self) -> Result<String, BackendError> {
        self.as_ref().read()
    }

    fn is_supported(&self) -> bool {
        self.as_ref().is_supported()
    }
}
