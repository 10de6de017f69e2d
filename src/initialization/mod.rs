//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the process-wide resources:
//! - the logger (stderr, plain or JSON)
//! - the HTTP client used to reach the analysis service
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
