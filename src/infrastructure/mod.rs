//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the OS clipboard and the config file.

pub mod clipboard;
pub mod config;

// Re-export adapters
pub use clipboard::{create_backend, ArboardClipboard, CommandClipboard};
pub use config::XdgConfigStore;
