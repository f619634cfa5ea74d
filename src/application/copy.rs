//! Copy use case: stdin → clipboard

use std::io::{self, Read};

use tracing::{debug, info};

use crate::domain::error::PayloadError;
use crate::domain::{ClipboardPayload, MAX_PAYLOAD_BYTES};

use super::clipboard::ClipboardAdapter;
use super::error::CommandError;
use super::ports::ClipboardBackend;

/// Output from the copy use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOutput {
    /// Number of bytes placed on the clipboard
    pub bytes: usize,
    /// Payload size in human-readable format
    pub size: String,
}

/// Copies everything readable from an input stream onto the clipboard
pub struct CopyUseCase<'a, B: ClipboardBackend> {
    clipboard: &'a ClipboardAdapter<B>,
}

impl<'a, B: ClipboardBackend> CopyUseCase<'a, B> {
    /// Create a new use case instance
    pub fn new(clipboard: &'a ClipboardAdapter<B>) -> Self {
        Self { clipboard }
    }

    /// Read `input` to end-of-stream, validate it and copy it.
    ///
    /// At most one byte past [`MAX_PAYLOAD_BYTES`] is read, so oversized or
    /// endless input is rejected without buffering all of it.
    pub fn execute<R: Read>(&self, mut input: R) -> Result<CopyOutput, CommandError> {
        let mut data = Vec::new();
        input
            .by_ref()
            .take(MAX_PAYLOAD_BYTES as u64 + 1)
            .read_to_end(&mut data)
            .map_err(CommandError::Input)?;
        debug!(bytes = data.len(), "read input");

        if data.len() > MAX_PAYLOAD_BYTES {
            return Err(PayloadError::TooLarge {
                size: data.len(),
                max: MAX_PAYLOAD_BYTES,
            }
            .into());
        }

        let text = String::from_utf8(data)
            .map_err(|e| CommandError::Input(io::Error::new(io::ErrorKind::InvalidData, e)))?;

        let payload = ClipboardPayload::new(text)?;
        self.clipboard.copy(payload.as_str())?;

        info!(
            backend = self.clipboard.backend_name(),
            size = %payload.human_readable_size(),
            "copied to clipboard"
        );

        Ok(CopyOutput {
            bytes: payload.size_bytes(),
            size: payload.human_readable_size(),
        })
    }
}
