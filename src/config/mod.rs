//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoint, timeouts, pacing delays)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{normalize_legacy_flags, Config, LogFormat, LogLevel, Opt, OutputFormat};
