//! Clipboard backend factory with automatic detection

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::application::ports::ClipboardBackend;

use super::arboard::ArboardClipboard;
use super::command::{ClipboardTool, CommandClipboard};

/// Valid backend preference values
pub const VALID_BACKENDS: &[&str] = &["auto", "arboard", "wl-clipboard", "xclip", "xsel", "termux"];

/// User preference for clipboard backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendPreference {
    /// Pick the best backend for this host (default)
    #[default]
    Auto,
    /// In-process clipboard access through arboard
    Arboard,
    /// A specific helper utility
    Tool(ClipboardTool),
}

impl fmt::Display for BackendPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendPreference::Auto => write!(f, "auto"),
            BackendPreference::Arboard => write!(f, "arboard"),
            BackendPreference::Tool(tool) => write!(f, "{}", tool),
        }
    }
}

/// Error type for parsing backend preference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBackendError {
    pub value: String,
}

impl fmt::Display for ParseBackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid backend '{}'. Valid options: {}",
            self.value,
            VALID_BACKENDS.join(", ")
        )
    }
}

impl std::error::Error for ParseBackendError {}

impl FromStr for BackendPreference {
    type Err = ParseBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(BackendPreference::Auto),
            "arboard" => Ok(BackendPreference::Arboard),
            "wl-clipboard" => Ok(BackendPreference::Tool(ClipboardTool::WlClipboard)),
            "xclip" => Ok(BackendPreference::Tool(ClipboardTool::Xclip)),
            "xsel" => Ok(BackendPreference::Tool(ClipboardTool::Xsel)),
            "termux" => Ok(BackendPreference::Tool(ClipboardTool::Termux)),
            _ => Err(ParseBackendError {
                value: s.to_string(),
            }),
        }
    }
}

/// Detect the best available helper tool
///
/// On macOS/Windows: None (arboard talks to the native clipboard)
/// On other Unix systems: wl-clipboard → xclip → xsel → termux
pub fn detect_clipboard_tool() -> Option<ClipboardTool> {
    #[cfg(any(not(unix), target_os = "macos"))]
    {
        return None;
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    {
        ClipboardTool::ALL
            .into_iter()
            .find(|tool| CommandClipboard::new(*tool).is_supported())
    }
}

/// Create a clipboard backend using the specified preference.
///
/// An explicitly requested tool is returned even when it is not installed;
/// its operations then report the clipboard as unavailable.
pub fn create_backend(preference: BackendPreference) -> Box<dyn ClipboardBackend> {
    let backend: Box<dyn ClipboardBackend> = match preference {
        BackendPreference::Arboard => Box::new(ArboardClipboard::new()),
        BackendPreference::Tool(tool) => Box::new(CommandClipboard::new(tool)),
        BackendPreference::Auto => match detect_clipboard_tool() {
            Some(tool) => Box::new(CommandClipboard::new(tool)),
            None => Box::new(ArboardClipboard::new()),
        },
    };

    debug!(%preference, backend = backend.name(), "selected clipboard backend");
    backend
}
