//! Application layer - Use cases and port interfaces
//!
//! Contains the clipboard adapter, the copy/paste/status operations
//! and trait definitions for external system interactions.

pub mod clipboard;
pub mod copy;
pub mod error;
pub mod paste;
pub mod ports;
pub mod status;

#[cfg(test)]
pub(crate) mod testing;

// Re-export use cases
pub use clipboard::{ClipboardAdapter, ClipboardError};
pub use copy::{CopyOutput, CopyUseCase};
pub use error::CommandError;
pub use paste::PasteUseCase;
pub use status::{check_status, ClipboardStatus};
