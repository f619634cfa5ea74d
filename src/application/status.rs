//! Status query: is a clipboard usable here?

use super::clipboard::ClipboardAdapter;
use super::ports::ClipboardBackend;

/// Snapshot of clipboard availability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardStatus {
    pub available: bool,
    pub backend: String,
}

/// Report availability of the configured clipboard. Never fails.
pub fn check_status<B: ClipboardBackend>(clipboard: &ClipboardAdapter<B>) -> ClipboardStatus {
    ClipboardStatus {
        available: clipboard.is_available(),
        backend: clipboard.backend_name().to_string(),
    }
}
