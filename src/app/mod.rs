//! Audit flow.
//!
//! One invocation walks a single path:
//! - no domain: print the usage hint, nothing is requested
//! - `update`: start a new scan and print the status narrative
//! - otherwise look up the summary; with no scan yet, start one, else fetch
//!   the findings of the first scan and render them
//!
//! Any failed request ends the audit immediately.

mod banner;
mod narrative;

use std::io::Write;

use log::info;

use crate::config::Config;
use crate::error_handling::AuditError;
use crate::initialization::init_client;
use crate::render::{render_records, severity_summary};
use crate::zonemaster::ZonemasterClient;

pub use banner::{print_banner, BANNER};
pub use narrative::{announce_line, follow_up_lines, ScanReason, USAGE_HINT};

use narrative::status_line;

/// How an audit ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditOutcome {
    /// No domain was given; only the usage hint was printed
    MissingDomain,
    /// A new scan was requested
    ScanStarted(ScanReason),
    /// The latest scan has no findings
    NoResults {
        /// Scan that was looked up
        scan_id: String,
    },
    /// Findings were printed
    Rendered {
        /// Scan that was looked up
        scan_id: String,
        /// Records printed, after dropping `SYSTEM` records
        shown: usize,
    },
}

/// Runs one audit as described by `config`, writing user output to `out`.
///
/// # Errors
///
/// Returns the first error met: client setup, a failed request, or a failed
/// write to `out`.
///
/// # Example
///
/// ```no_run
/// use dnsaudit::{run_audit, Config};
///
/// # async fn example() -> Result<(), dnsaudit::AuditError> {
/// let config = Config {
///     domain: Some("example.com".to_string()),
///     ..Default::default()
/// };
/// let outcome = run_audit(&config, &mut std::io::stdout()).await?;
/// println!("{outcome:?}");
/// # Ok(())
/// # }
/// ```
pub async fn run_audit<W: Write>(config: &Config, out: &mut W) -> Result<AuditOutcome, AuditError> {
    let Some(domain) = config.domain.as_deref() else {
        writeln!(out, "{USAGE_HINT}")?;
        return Ok(AuditOutcome::MissingDomain);
    };

    let http = init_client(config)?;
    let client = ZonemasterClient::new(http, &config.endpoint)?;

    if config.update {
        info!("Forcing a new scan for {}", domain);
        return start_scan(&client, domain, ScanReason::Forced, config.pacing, out).await;
    }

    let summary = client.fetch_summary(domain).await?;
    let Some(handle) = summary.latest() else {
        info!("No scan found for {}", domain);
        return start_scan(&client, domain, ScanReason::NoCachedResults, config.pacing, out)
            .await;
    };

    let scan_id = handle.id.clone();
    info!(
        "Using scan {} for {} ({} known)",
        scan_id,
        domain,
        summary.handles.len()
    );
    let details = client.fetch_details(&scan_id).await?;
    if details.is_empty() {
        writeln!(out, "No results found for {domain}.")?;
        return Ok(AuditOutcome::NoResults { scan_id });
    }

    let shown = render_records(&details, config.output_format, config.pacing, out).await?;
    info!(
        "Printed {} of {} record(s) from scan {} ({})",
        shown,
        details.len(),
        scan_id,
        severity_summary(&details)
    );
    Ok(AuditOutcome::Rendered { scan_id, shown })
}

/// Requests a new scan and prints the status narrative.
///
/// Without cached results the announcement comes before the request;
/// a forced update announces only once the request went through.
async fn start_scan<W: Write>(
    client: &ZonemasterClient,
    domain: &str,
    reason: ScanReason,
    pacing: bool,
    out: &mut W,
) -> Result<AuditOutcome, AuditError> {
    let announce = announce_line(reason, domain);
    match reason {
        ScanReason::NoCachedResults => {
            status_line(out, &announce, pacing).await?;
            client.trigger_scan(domain).await?;
        }
        ScanReason::Forced => {
            client.trigger_scan(domain).await?;
            status_line(out, &announce, pacing).await?;
        }
    }

    for line in follow_up_lines(domain) {
        status_line(out, &line, pacing).await?;
    }
    Ok(AuditOutcome::ScanStarted(reason))
}
