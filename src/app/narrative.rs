//! Status messages printed when a new scan is started.
//!
//! No polling happens: the narrative only tells the user when to come back.

use std::io::Write;

use colored::*;

use crate::config::{SCAN_ETA_SECS, STATUS_LINE_DELAY};
use crate::error_handling::AuditError;
use crate::render::pause;

/// Printed when no domain was given.
pub const USAGE_HINT: &str = "Please provide a domain using the -domain flag.";

/// Why a new scan is being started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanReason {
    /// `-update` was given
    Forced,
    /// The service has no scan for the domain yet
    NoCachedResults,
}

/// First line of the narrative, announcing the scan request.
pub fn announce_line(reason: ScanReason, domain: &str) -> String {
    match reason {
        ScanReason::Forced => format!("Making new request to start scan for {domain}"),
        ScanReason::NoCachedResults => {
            format!("No cached results found. Making new request to start scan for {domain}")
        }
    }
}

/// Lines printed once the scan request went through.
pub fn follow_up_lines(domain: &str) -> Vec<String> {
    vec![
        "New Scan started".to_string(),
        format!("Scan results should be available in ~{SCAN_ETA_SECS} secs"),
        format!("Run 'dnsaudit -domain {domain}' again after {SCAN_ETA_SECS} secs"),
        "Quitting...".to_string(),
    ]
}

/// Writes one `[INFO]`-tagged status line.
pub async fn status_line<W: Write>(out: &mut W, text: &str, pacing: bool) -> Result<(), AuditError> {
    writeln!(out, "{} {}", "[INFO]".green(), text)?;
    out.flush()?;
    pause(pacing, STATUS_LINE_DELAY).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_announce_lines_differ_by_reason() {
        let forced = announce_line(ScanReason::Forced, "example.com");
        let cold = announce_line(ScanReason::NoCachedResults, "example.com");

        assert_eq!(forced, "Making new request to start scan for example.com");
        assert_eq!(
            cold,
            "No cached results found. Making new request to start scan for example.com"
        );
    }

    #[test]
    fn test_follow_up_mentions_rerun_command() {
        let lines = follow_up_lines("example.com");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "New Scan started");
        assert!(lines[2].contains("dnsaudit -domain example.com"));
        assert_eq!(lines[3], "Quitting...");
    }

    #[tokio::test]
    async fn test_status_line_is_tagged() {
        let mut out = Vec::new();
        status_line(&mut out, "New Scan started", false)
            .await
            .expect("writing to a Vec cannot fail");
        let text = String::from_utf8(out).expect("utf-8 output");
        assert!(text.contains("[INFO]"));
        assert!(text.ends_with("New Scan started\n"));
    }
}
