//! CLI presenter for output formatting

use colored::*;

use crate::application::ClipboardStatus;

/// Hint shown when no clipboard mechanism is available
pub const INSTALL_HINT: &str = "Install xsel, xclip, wl-clipboard or the Termux:API add-on";

/// Presenter for CLI output formatting
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Print clipboard availability to stdout
    pub fn status(&self, status: &ClipboardStatus) {
        println!("{}", self.format_status(status));
        if !status.available {
            println!("{} {}", "ℹ".cyan(), INSTALL_HINT);
        }
    }

    /// Format the availability line of `status`
    pub fn format_status(&self, status: &ClipboardStatus) -> String {
        if status.available {
            format!(
                "{} Clipboard is available (backend: {})",
                "✓".green(),
                status.backend
            )
        } else {
            format!(
                "{} Clipboard is unavailable (backend: {})",
                "✗".red(),
                status.backend
            )
        }
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
