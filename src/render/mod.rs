//! Terminal rendering of scan findings.
//!
//! Records from the `SYSTEM` module are dropped; everything else is printed in
//! the order the service returned it, either as one colorized line or as JSON
//! lines.

use std::io::Write;
use std::time::Duration;

use colored::*;
use strum::IntoEnumIterator;

use crate::config::{OutputFormat, RECORD_DELAY};
use crate::error_handling::AuditError;
use crate::zonemaster::{DiagnosticRecord, Severity};

/// Module names are always shown in this color.
const MODULE_COLOR: Color = Color::Cyan;
/// Message text is always shown in this color.
const MESSAGE_COLOR: Color = Color::Yellow;

/// Iterates over the records meant for the user.
pub fn visible_records(records: &[DiagnosticRecord]) -> impl Iterator<Item = &DiagnosticRecord> {
    records.iter().filter(|record| !record.is_system())
}

/// Counts the visible records per severity, e.g. `INFO=5, WARNING=2`.
///
/// Severities without records are left out.
pub fn severity_summary(records: &[DiagnosticRecord]) -> String {
    Severity::iter()
        .filter_map(|severity| {
            let count = visible_records(records)
                .filter(|record| record.severity() == severity)
                .count();
            (count > 0).then(|| format!("{severity}={count}"))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats one record as `[<level>] [<module>] <message>`.
///
/// The level keeps the spelling the service used; only its color is derived
/// from the parsed severity.
pub fn format_record(record: &DiagnosticRecord) -> String {
    format!(
        "[{}] [{}] {}",
        record.level.as_str().color(record.severity().color()),
        record.module.as_str().color(MODULE_COLOR),
        record.message.as_str().color(MESSAGE_COLOR)
    )
}

/// Writes the visible records to `out` and returns how many were written.
///
/// In text mode records share one line, separated by a single space, and
/// `pacing` is waited between records. JSON-lines output is never paced.
pub async fn render_records<W: Write>(
    records: &[DiagnosticRecord],
    format: OutputFormat,
    pacing: bool,
    out: &mut W,
) -> Result<usize, AuditError> {
    match format {
        OutputFormat::Text => render_text(records, pacing, out).await,
        OutputFormat::Jsonl => render_jsonl(records, out),
    }
}

async fn render_text<W: Write>(
    records: &[DiagnosticRecord],
    pacing: bool,
    out: &mut W,
) -> Result<usize, AuditError> {
    let mut written = 0;
    for record in visible_records(records) {
        if written > 0 {
            write!(out, " ")?;
        }
        write!(out, "{}", format_record(record))?;
        out.flush()?;
        written += 1;
        pause(pacing, RECORD_DELAY).await;
    }
    writeln!(out)?;
    Ok(written)
}

fn render_jsonl<W: Write>(records: &[DiagnosticRecord], out: &mut W) -> Result<usize, AuditError> {
    let mut written = 0;
    for record in visible_records(records) {
        serde_json::to_writer(&mut *out, record)?;
        writeln!(out)?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

/// Sleeps for `delay` when pacing is enabled.
pub(crate) async fn pause(pacing: bool, delay: Duration) {
    if pacing {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn record(module: &str, level: &str, message: &str) -> DiagnosticRecord {
        DiagnosticRecord {
            module: module.to_string(),
            level: level.to_string(),
            message: message.to_string(),
        }
    }

    fn strip_ansi(s: &str) -> String {
        Regex::new(r"\x1b\[[0-9;]*m")
            .expect("valid regex")
            .replace_all(s, "")
            .into_owned()
    }

    async fn render_text_plain(records: &[DiagnosticRecord]) -> (usize, String) {
        let mut out = Vec::new();
        let count = render_records(records, OutputFormat::Text, false, &mut out)
            .await
            .expect("writing to a Vec cannot fail");
        (count, strip_ansi(&String::from_utf8_lossy(&out)))
    }

    #[tokio::test]
    async fn test_system_records_are_dropped_in_order() {
        let records = vec![
            record("DNS", "WARNING", "m1"),
            record("SYSTEM", "ERROR", "m2"),
            record("NS", "INFO", "m3"),
        ];
        let (count, text) = render_text_plain(&records).await;

        assert_eq!(count, 2);
        assert_eq!(text, "[WARNING] [DNS] m1 [INFO] [NS] m3\n");
    }

    #[tokio::test]
    async fn test_system_module_any_case_is_hidden() {
        let records = vec![
            record("system", "INFO", "a"),
            record("System", "INFO", "b"),
            record("SYSTEM", "INFO", "c"),
            record("BASIC", "NOTICE", "d"),
        ];
        let (count, text) = render_text_plain(&records).await;

        assert_eq!(count, 1);
        assert_eq!(text, "[NOTICE] [BASIC] d\n");
    }

    #[tokio::test]
    async fn test_no_trailing_separator_when_last_record_is_hidden() {
        let records = vec![record("DNS", "INFO", "m1"), record("SYSTEM", "INFO", "m2")];
        let (_, text) = render_text_plain(&records).await;
        assert_eq!(text, "[INFO] [DNS] m1\n");
    }

    #[tokio::test]
    async fn test_only_system_records_prints_newline() {
        let records = vec![record("SYSTEM", "INFO", "engine")];
        let (count, text) = render_text_plain(&records).await;
        assert_eq!(count, 0);
        assert_eq!(text, "\n");
    }

    #[tokio::test]
    async fn test_unknown_level_renders_without_error() {
        let records = vec![record("DNS", "DEBUG", "odd level")];
        let (count, text) = render_text_plain(&records).await;
        assert_eq!(count, 1);
        assert_eq!(text, "[DEBUG] [DNS] odd level\n");
    }

    #[test]
    fn test_severity_summary_counts_visible_records() {
        let records = vec![
            record("DNS", "warning", "m1"),
            record("SYSTEM", "ERROR", "m2"),
            record("NS", "INFO", "m3"),
            record("NS", "Warning", "m4"),
            record("ZONE", "DEBUG", "m5"),
        ];
        assert_eq!(
            severity_summary(&records),
            "INFO=1, WARNING=2, UNKNOWN=1"
        );
    }

    #[test]
    fn test_severity_summary_empty() {
        assert_eq!(severity_summary(&[record("SYSTEM", "INFO", "engine")]), "");
    }

    #[tokio::test]
    async fn test_jsonl_output() {
        let records = vec![
            record("DNS", "WARNING", "m1"),
            record("SYSTEM", "ERROR", "m2"),
            record("NS", "info", "m3"),
        ];
        let mut out = Vec::new();
        let count = render_records(&records, OutputFormat::Jsonl, true, &mut out)
            .await
            .expect("writing to a Vec cannot fail");

        assert_eq!(count, 2);
        let lines: Vec<serde_json::Value> = String::from_utf8(out)
            .expect("utf-8 output")
            .lines()
            .map(|line| serde_json::from_str(line).expect("each line is JSON"))
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["module"], "DNS");
        assert_eq!(lines[0]["level"], "WARNING");
        assert_eq!(lines[1]["message"], "m3");
        assert_eq!(lines[1]["level"], "info");
    }
}
