//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use mfrcat_core::CoreError;

/// Exit codes for process termination.
#[allow(dead_code)]
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the vPIC API")]
    #[diagnostic(
        code(mfrcat::connection_failed),
        help(
            "Check your network connection and the configured base URL.\n\
             Current base URL: {url}\n\
             Override with --base-url or MFRCAT_BASE_URL."
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out after {seconds}s")]
    #[diagnostic(
        code(mfrcat::timeout),
        help("Increase the timeout with --timeout or MFRCAT_TIMEOUT_SECS.")
    )]
    Timeout { seconds: u64 },

    // ── Resources ────────────────────────────────────────────────────
    #[error("Manufacturer '{id}' not found")]
    #[diagnostic(
        code(mfrcat::not_found),
        help("Run: mfrcat list to see available manufacturer ids")
    )]
    NotFound { id: String },

    // ── API ──────────────────────────────────────────────────────────
    #[error("vPIC API error: {message}")]
    #[diagnostic(code(mfrcat::api_error))]
    ApiError { message: String },

    #[error("Could not decode the vPIC response: {message}")]
    #[diagnostic(
        code(mfrcat::decode),
        help("The API may be degraded or the base URL may point at the wrong service.")
    )]
    Decode { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(mfrcat::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(mfrcat::config),
        help("Inspect the active configuration with: mfrcat config show")
    )]
    Config(#[from] mfrcat_config::ConfigError),

    // ── IO ───────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl CliError {
    /// Translate a `CoreError`, attaching request context for the help text.
    pub fn from_core(err: CoreError, base_url: &str, timeout_secs: u64) -> Self {
        match err {
            CoreError::ConnectionFailed { reason } => Self::ConnectionFailed {
                url: base_url.to_owned(),
                reason,
            },

            CoreError::Timeout => Self::Timeout {
                seconds: timeout_secs,
            },

            CoreError::ManufacturerNotFound { id } => Self::NotFound { id: id.to_string() },

            CoreError::Decode { message } => Self::Decode { message },

            CoreError::Api { message, .. } => Self::ApiError { message },

            CoreError::Config { message } => Self::Validation {
                field: "config".into(),
                reason: message,
            },
        }
    }
}
