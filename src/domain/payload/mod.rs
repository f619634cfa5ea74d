//! Clipboard payload domain module

mod clipboard_payload;

pub use clipboard_payload::{ClipboardPayload, MAX_PAYLOAD_BYTES};
