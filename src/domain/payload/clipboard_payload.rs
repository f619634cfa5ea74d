//! Clipboard payload value object

use std::fmt;

use crate::domain::error::PayloadError;

/// Largest payload accepted by `copy` (1 MiB)
pub const MAX_PAYLOAD_BYTES: usize = 1024 * 1024;

/// Value object representing text headed for the clipboard.
/// Never empty, never whitespace-only, never larger than [`MAX_PAYLOAD_BYTES`].
/// The text is kept verbatim: no trimming, no newline normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardPayload {
    text: String,
}

impl ClipboardPayload {
    /// Validate text and wrap it as a payload.
    ///
    /// Emptiness is checked before size.
    pub fn new(text: impl Into<String>) -> Result<Self, PayloadError> {
        let text = text.into();

        if text.trim().is_empty() {
            return Err(PayloadError::Empty);
        }

        if text.len() > MAX_PAYLOAD_BYTES {
            return Err(PayloadError::TooLarge {
                size: text.len(),
                max: MAX_PAYLOAD_BYTES,
            });
        }

        Ok(Self { text })
    }

    /// Get the payload text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume and return the payload text
    pub fn into_string(self) -> String {
        self.text
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> usize {
        self.text.len()
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        let bytes = self.size_bytes();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}

impl fmt::Display for ClipboardPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
