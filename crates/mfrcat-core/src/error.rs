// ── Core error types ──
//
// User-facing errors from mfrcat-core. Consumers never see raw HTTP
// status codes or JSON parse failures directly — the `From<mfrcat_api::Error>`
// impl translates transport-layer errors into domain-appropriate variants.

use thiserror::Error;

use crate::model::MfrId;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach the vehicle registry: {reason}")]
    ConnectionFailed { reason: String },

    #[error("Request timed out")]
    Timeout,

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Manufacturer not found: {id}")]
    ManufacturerNotFound { id: MfrId },

    #[error("Registry response could not be decoded: {message}")]
    Decode { message: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("Registry error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<mfrcat_api::Error> for CoreError {
    fn from(err: mfrcat_api::Error) -> Self {
        match err {
            mfrcat_api::Error::Transport(e) => {
                if e.is_timeout() {
                    Self::Timeout
                } else if e.is_connect() {
                    Self::ConnectionFailed {
                        reason: e.to_string(),
                    }
                } else {
                    Self::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }

            mfrcat_api::Error::InvalidUrl(e) => Self::Config {
                message: format!("invalid base URL: {e}"),
            },

            mfrcat_api::Error::Api { status, message } => Self::Api {
                message,
                status: Some(status),
            },

            mfrcat_api::Error::NotFound { id } => Self::ManufacturerNotFound {
                id: MfrId::new(id),
            },

            mfrcat_api::Error::Deserialization { message, .. } => Self::Decode { message },
        }
    }
}
