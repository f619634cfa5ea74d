//! Clipboard infrastructure module
//!
//! Provides clipboard backends: arboard (in-process, cross-platform) and
//! helper utilities (wl-clipboard, xclip, xsel, Termux:API).

mod arboard;
mod command;
mod factory;

pub use arboard::ArboardClipboard;
pub use command::{is_tool_available, ClipboardTool, CommandClipboard, CommandSpec};
pub use factory::{
    create_backend, detect_clipboard_tool, BackendPreference, ParseBackendError, VALID_BACKENDS,
};
