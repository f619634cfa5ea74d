//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Backend used when nothing else is configured
pub const DEFAULT_BACKEND: &str = "auto";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend: Option<String>,
    pub color: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            backend: Some(DEFAULT_BACKEND.to_string()),
            color: Some(true),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            backend: other.backend.or(self.backend),
            color: other.color.or(self.color),
        }
    }

    /// Get backend preference, or "auto" if not set
    pub fn backend_or_default(&self) -> &str {
        self.backend.as_deref().unwrap_or(DEFAULT_BACKEND)
    }

    /// Get color setting, or true if not set
    pub fn color_or_default(&self) -> bool {
        self.color.unwrap_or(true)
    }
}
