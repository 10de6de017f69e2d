//! Wire models for the Zonemaster data call.
//!
//! Only the fields the audit actually consumes are modeled. Unknown fields
//! (`messages`, `see_also`, ...) are ignored by serde.

use serde::{Deserialize, Serialize};

use crate::config::SYSTEM_MODULE;
use crate::zonemaster::severity::Severity;

/// Opaque identifier of a scan, produced by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScanHandle {
    /// Scan identifier, used as the `resource` of a details lookup
    pub id: String,
}

/// Result of a summary lookup for a domain.
///
/// An empty `handles` list means no scan has completed for the domain yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Known scans, in the order the service returned them
    pub handles: Vec<ScanHandle>,
    /// Data call version reported by the service
    pub version: Option<String>,
    /// Whether the service answered from its own cache
    pub cached: Option<bool>,
    /// Data call status reported by the service
    pub status: Option<String>,
}

impl ScanSummary {
    /// Returns the handle to use for the details lookup: always the first one.
    pub fn latest(&self) -> Option<&ScanHandle> {
        self.handles.first()
    }
}

/// One finding of a completed scan.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DiagnosticRecord {
    /// Check category, e.g. `DNSSEC` or `NAMESERVER`
    pub module: String,
    /// Severity as reported by the service
    pub level: String,
    /// Human-readable finding
    pub message: String,
}

impl DiagnosticRecord {
    /// Severity of this record, case-folded into the closed set.
    pub fn severity(&self) -> Severity {
        Severity::from_level(&self.level)
    }

    /// Whether this record is internal bookkeeping of the service.
    pub fn is_system(&self) -> bool {
        self.module.eq_ignore_ascii_case(SYSTEM_MODULE)
    }
}

/// Findings of a scan, in check execution order.
pub type DetailsResult = Vec<DiagnosticRecord>;

// Envelopes as returned by the service

#[derive(Debug, Deserialize)]
pub(crate) struct SummaryEnvelope {
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    cached: Option<bool>,
    #[serde(default)]
    data_call_status: Option<String>,
    data: SummaryData,
}

#[derive(Debug, Deserialize)]
struct SummaryData {
    #[serde(default)]
    result: Vec<ScanHandle>,
}

impl From<SummaryEnvelope> for ScanSummary {
    fn from(envelope: SummaryEnvelope) -> Self {
        Self {
            handles: envelope.data.result,
            version: envelope.version,
            cached: envelope.cached,
            status: envelope.data_call_status,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetailsEnvelope {
    data: DetailsData,
}

#[derive(Debug, Deserialize)]
struct DetailsData {
    #[serde(default)]
    result: DetailsPayload,
}

#[derive(Debug, Default, Deserialize)]
struct DetailsPayload {
    #[serde(default)]
    results: Vec<DiagnosticRecord>,
}

impl From<DetailsEnvelope> for DetailsResult {
    fn from(envelope: DetailsEnvelope) -> Self {
        envelope.data.result.results
    }
}
