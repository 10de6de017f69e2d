//! Configuration constants.
//!
//! This module defines the constants used throughout the application: the
//! analysis service endpoint, request timeouts and the output pacing delays.

use std::time::Duration;

/// Base URL of the hosted Zonemaster analysis data call.
pub const DEFAULT_ENDPOINT: &str = "https://stat.ripe.net/data/zonemaster/data.json";

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User-Agent sent with every request to the analysis service.
pub const USER_AGENT: &str = concat!("dnsaudit/", env!("CARGO_PKG_VERSION"));

// Query parameters understood by the data call
/// Name of the query parameter carrying a domain or scan identifier
pub const PARAM_RESOURCE: &str = "resource";
/// Name of the query parameter selecting an alternate method
pub const PARAM_METHOD: &str = "method";
/// Method returning the per-check results of a scan
pub const METHOD_DETAILS: &str = "details";
/// Method starting a new scan for a domain
pub const METHOD_TEST: &str = "test";

/// Module name the service uses for its own bookkeeping messages.
/// Records from this module are never shown to the user.
pub const SYSTEM_MODULE: &str = "SYSTEM";

// Output pacing (cosmetic only, disabled with --no-pacing)
/// Delay between lines of the status narrative
pub const STATUS_LINE_DELAY: Duration = Duration::from_millis(30);
/// Delay between rendered diagnostic records
pub const RECORD_DELAY: Duration = Duration::from_millis(20);

/// Maximum number of body bytes quoted in a decode error
pub const DECODE_ERROR_SNIPPET_LEN: usize = 200;

/// Approximate time the service needs to complete a scan, quoted to the user.
pub const SCAN_ETA_SECS: u64 = 30;
