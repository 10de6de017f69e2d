//! dnsaudit library: DNS health findings from the hosted Zonemaster analysis
//!
//! This library looks up the latest Zonemaster scan of a domain, starts a new
//! scan when none exists (or when asked to), and prints the findings with
//! level-based coloring.
//!
//! # Example
//!
//! ```no_run
//! use dnsaudit::{run_audit, AuditOutcome, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     domain: Some("example.com".to_string()),
//!     pacing: false,
//!     ..Default::default()
//! };
//!
//! match run_audit(&config, &mut std::io::stdout()).await? {
//!     AuditOutcome::Rendered { shown, .. } => eprintln!("{shown} findings"),
//!     other => eprintln!("{other:?}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod app;
pub mod config;
mod error_handling;
pub mod initialization;
pub mod render;
pub mod zonemaster;

// Re-export public API
pub use app::{print_banner, run_audit, AuditOutcome, ScanReason, BANNER, USAGE_HINT};
pub use config::{normalize_legacy_flags, Config, LogFormat, LogLevel, Opt, OutputFormat};
pub use error_handling::{cli_exit_code, exit_code, ApiError, AuditError, InitializationError};
pub use zonemaster::{DiagnosticRecord, ScanHandle, ScanSummary, Severity, ZonemasterClient};
