//! fclip - copy stdin to the system clipboard and paste it to stdout
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: the clipboard payload value object, configuration and errors
//! - **Application**: the clipboard adapter, copy/paste/status use cases and port traits
//! - **Infrastructure**: clipboard backends (arboard, helper utilities) and the config store
//! - **CLI**: argument parsing, output formatting and the command dispatcher

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
