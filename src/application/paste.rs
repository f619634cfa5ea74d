//! Paste use case: clipboard → stdout

use std::io::Write;

use tracing::debug;

use super::clipboard::ClipboardAdapter;
use super::error::CommandError;
use super::ports::ClipboardBackend;

/// Writes the clipboard contents to an output stream
pub struct PasteUseCase<'a, B: ClipboardBackend> {
    clipboard: &'a ClipboardAdapter<B>,
}

impl<'a, B: ClipboardBackend> PasteUseCase<'a, B> {
    /// Create a new use case instance
    pub fn new(clipboard: &'a ClipboardAdapter<B>) -> Self {
        Self { clipboard }
    }

    /// Write the clipboard text to `output` verbatim, without a trailing newline.
    ///
    /// Returns the number of bytes written.
    pub fn execute<W: Write>(&self, mut output: W) -> Result<usize, CommandError> {
        let text = self.clipboard.paste()?;

        output
            .write_all(text.as_bytes())
            .and_then(|_| output.flush())
            .map_err(CommandError::Output)?;

        debug!(bytes = text.len(), "wrote clipboard to output");
        Ok(text.len())
    }
}
