//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors returned by the analysis service client.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request could not be sent or the response body could not be read.
    #[error("request to {url} failed: {source}")]
    Transport {
        /// URL of the failed request
        url: String,
        /// Underlying HTTP client error
        #[source]
        source: ReqwestError,
    },

    /// The response body does not have the expected JSON shape.
    #[error("unexpected response from {url} (HTTP {status}): {source}; body starts with {snippet:?}")]
    Decode {
        /// URL of the request
        url: String,
        /// HTTP status of the response
        status: u16,
        /// Leading part of the response body
        snippet: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The configured endpoint is not a valid URL.
    #[error("invalid endpoint {endpoint:?}: {source}")]
    InvalidEndpoint {
        /// Endpoint as configured
        endpoint: String,
        /// Underlying URL parse error
        #[source]
        source: url::ParseError,
    },
}

/// Top-level error of an audit run.
#[derive(Error, Debug)]
pub enum AuditError {
    /// A call to the analysis service failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A shared resource could not be initialized.
    #[error(transparent)]
    Initialization(#[from] InitializationError),

    /// Writing to the output stream failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// Records could not be serialized for JSON-lines output.
    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Process exit codes.
///
/// Every completed branch of an audit (usage hint, scan started, no results,
/// findings printed) exits with `SUCCESS`.
pub mod exit_code {
    /// The audit completed
    pub const SUCCESS: i32 = 0;
    /// Initialization, configuration or output failure
    pub const FAILURE: i32 = 1;
    /// The analysis service could not be reached
    pub const TRANSPORT: i32 = 2;
    /// The analysis service returned an unexpected response
    pub const DECODE: i32 = 3;
    /// The command line could not be parsed
    pub const USAGE: i32 = 4;
}

/// Returns the process exit code for a command-line parsing error.
///
/// `--help` and `--version` surface as clap errors but are successful runs.
pub fn cli_exit_code(err: &clap::Error) -> i32 {
    use clap::error::ErrorKind;

    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit_code::SUCCESS,
        _ => exit_code::USAGE,
    }
}

impl AuditError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AuditError::Api(ApiError::Transport { .. }) => exit_code::TRANSPORT,
            AuditError::Api(ApiError::Decode { .. }) => exit_code::DECODE,
            AuditError::Api(ApiError::InvalidEndpoint { .. })
            | AuditError::Initialization(_)
            | AuditError::Output(_)
            | AuditError::Serialize(_) => exit_code::FAILURE,
        }
    }
}
