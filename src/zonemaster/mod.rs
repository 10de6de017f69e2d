//! Access to the hosted Zonemaster DNS health analysis.
//!
//! This module provides:
//! - `ZonemasterClient`: summary lookup, details lookup and scan trigger
//! - the typed records decoded from the service responses
//! - `Severity`, the closed set of record levels

mod client;
mod models;
mod severity;

// Re-export public API
pub use client::ZonemasterClient;
pub use models::{DetailsResult, DiagnosticRecord, ScanHandle, ScanSummary};
pub use severity::Severity;
