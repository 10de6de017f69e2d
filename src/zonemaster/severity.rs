//! Severity levels of diagnostic records.

use colored::Color;
use strum_macros::EnumIter as EnumIterMacro;

/// Severity of a diagnostic record.
///
/// The service reports levels as free-form strings; anything outside the
/// known set maps to `Unknown` instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum Severity {
    /// Informational finding
    Info,
    /// Finding that deserves attention
    Warning,
    /// Misconfiguration
    Error,
    /// Noteworthy but harmless
    Notice,
    /// Any level the service may add later
    Unknown,
}

impl Severity {
    /// Parses a level string, ignoring case.
    pub fn from_level(level: &str) -> Self {
        match level.to_ascii_uppercase().as_str() {
            "INFO" => Severity::Info,
            "WARNING" => Severity::Warning,
            "ERROR" => Severity::Error,
            "NOTICE" => Severity::Notice,
            _ => Severity::Unknown,
        }
    }

    /// Display color of the level tag.
    pub fn color(self) -> Color {
        match self {
            Severity::Info => Color::Green,
            Severity::Warning => Color::Yellow,
            Severity::Error => Color::Red,
            Severity::Notice => Color::Magenta,
            Severity::Unknown => Color::White,
        }
    }

    /// Canonical upper-case name of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Notice => "NOTICE",
            Severity::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
