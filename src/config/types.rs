//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::ffi::OsString;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, ValueEnum};

use crate::config::constants::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Format used to print the diagnostic records of a scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single colorized line, records separated by spaces (default)
    Text,
    /// One JSON object per record, one record per line
    Jsonl,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use dnsaudit::Config;
///
/// let config = Config {
///     domain: Some("example.com".to_string()),
///     pacing: false,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Domain to audit. `None` means no domain was provided.
    pub domain: Option<String>,

    /// Start a new scan even if cached results exist
    pub update: bool,

    /// Base URL of the analysis service
    pub endpoint: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Output format for diagnostic records
    pub output_format: OutputFormat,

    /// Insert the cosmetic delays between printed lines
    pub pacing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: None,
            update: false,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            output_format: OutputFormat::Text,
            pacing: true,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Show the latest cached results
/// dnsaudit -domain example.com
///
/// # Force a new scan
/// dnsaudit -domain example.com -update
///
/// # Machine-readable output, no pacing
/// dnsaudit --domain example.com --format jsonl --no-pacing
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "dnsaudit",
    version,
    about = "Shows the Zonemaster DNS health findings for a domain."
)]
pub struct Opt {
    /// Domain name to query
    #[arg(short = 'd', long)]
    pub domain: Option<String>,

    /// Start a new scan instead of reading cached results
    ///
    /// Also accepts an explicit value (`--update=true`, `--update=false`).
    #[arg(
        short = 'u',
        long,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub update: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Output format for scan findings: text|jsonl
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Base URL of the Zonemaster data call
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Print output without the delays between lines
    #[arg(long)]
    pub no_pacing: bool,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        // An empty or blank domain is the same as no domain at all.
        let domain = opt
            .domain
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Self {
            domain,
            update: opt.update,
            endpoint: opt.endpoint,
            timeout_seconds: opt.timeout_seconds,
            log_level: opt.log_level,
            log_format: opt.log_format,
            output_format: opt.output_format,
            pacing: !opt.no_pacing,
        }
    }
}

/// Long flags that may also be spelled with a single dash (`-domain`).
const LEGACY_FLAGS: &[&str] = &["domain", "update"];

/// Rewrites single-dash long flags (`-domain x`, `-domain=x`, `-update`,
/// `-update=false`) to their double-dash form so clap can parse them.
///
/// Anything else, including values and short flags, is passed through untouched.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let Some(s) = arg.to_str() else {
                return arg;
            };
            let Some(rest) = s.strip_prefix('-') else {
                return arg;
            };
            if rest.starts_with('-') {
                return arg;
            }
            let name = rest.split('=').next().unwrap_or(rest);
            if LEGACY_FLAGS.contains(&name) {
                OsString::from(format!("-{s}"))
            } else {
                arg
            }
        })
        .collect()
}
