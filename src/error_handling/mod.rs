//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, service calls and output
//! - The exit code policy of the command-line tool, including parse errors
//!
//! An empty scan result is not an error: it is a normal branch of the audit
//! and is reported through [`crate::AuditOutcome`].

mod types;

// Re-export public API
pub use types::{cli_exit_code, exit_code, ApiError, AuditError, InitializationError};
