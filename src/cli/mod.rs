//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, the config command
//! and the command dispatcher.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;

// Re-export commonly used types
pub use app::{run, EXIT_ERROR, EXIT_SUCCESS};
pub use args::{Cli, Commands, ConfigAction};
pub use presenter::Presenter;
