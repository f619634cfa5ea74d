//! Errors surfaced by the copy/paste commands

use std::io;

use thiserror::Error;

use crate::domain::error::PayloadError;

use super::clipboard::ClipboardError;

/// Terminal errors of a clipboard command
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to read from stdin: {0}")]
    Input(#[source] io::Error),

    #[error("{0}")]
    Validation(#[from] PayloadError),

    #[error("clipboard is unavailable: {0}")]
    Unavailable(String),

    #[error("{0}")]
    Adapter(String),

    #[error("failed to write to stdout: {0}")]
    Output(#[source] io::Error),
}

impl From<ClipboardError> for CommandError {
    fn from(err: ClipboardError) -> Self {
        match err {
            ClipboardError::EmptyData => CommandError::Validation(PayloadError::Empty),
            ClipboardError::Unavailable(reason) => CommandError::Unavailable(reason),
            ClipboardError::Backend(message) => CommandError::Adapter(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_data_is_a_validation_error() {
        assert!(matches!(
            CommandError::from(ClipboardError::EmptyData),
            CommandError::Validation(PayloadError::Empty)
        ));
    }

    #[test]
    fn backend_message_is_kept_verbatim() {
        let err = CommandError::from(ClipboardError::Backend("xclip exited with status 1".into()));
        assert_eq!(err.to_string(), "xclip exited with status 1");
    }

    #[test]
    fn unavailable_keeps_reason() {
        let err = CommandError::from(ClipboardError::Unavailable("xsel not found".into()));
        assert_eq!(err.to_string(), "clipboard is unavailable: xsel not found");
    }
}
