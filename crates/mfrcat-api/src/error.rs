use thiserror::Error;

/// Top-level error type for the `mfrcat-api` crate.
///
/// Covers every failure mode of the vPIC HTTP surface: transport, URL
/// construction, non-2xx responses, and body decoding. `mfrcat-core` maps
/// these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── API ─────────────────────────────────────────────────────────
    /// Non-2xx response from the vPIC API.
    #[error("vPIC API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The detail endpoint returned an empty `Results` array for this id.
    #[error("No manufacturer record for id {id}")]
    NotFound { id: u32 },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::Api { status: 404, .. } | Self::NotFound { .. } => true,
            _ => false,
        }
    }
}
