//! Domain layer - Core business logic
//!
//! Contains value objects and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod payload;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use payload::{ClipboardPayload, MAX_PAYLOAD_BYTES};
