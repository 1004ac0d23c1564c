// ── Core error types ──
//
// User-facing errors from salesdash-core. These are NOT transport-specific:
// consumers never see reqwest errors or JSON parse failures directly.
// The `From<salesdash_api::Error>` impl translates transport-layer errors
// into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach dashboard backend at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Unexpected payload: {message}")]
    InvalidPayload { message: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    /// A port failure carrying only a message. Displays the bare message,
    /// so stores surface exactly what the port reported.
    #[error("{message}")]
    Fetch { message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a message-only fetch failure.
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    /// The message a store should record, or `None` when it is blank.
    pub fn message(&self) -> Option<String> {
        let msg = self.to_string();
        if msg.trim().is_empty() { None } else { Some(msg) }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<salesdash_api::Error> for CoreError {
    fn from(err: salesdash_api::Error) -> Self {
        match err {
            salesdash_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout { timeout_secs: 0 }
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            salesdash_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            salesdash_api::Error::Timeout { timeout_secs } => CoreError::Timeout { timeout_secs },
            salesdash_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            salesdash_api::Error::Status { status: 404, message } => CoreError::NotFound {
                resource: message,
            },
            salesdash_api::Error::Status { status, message } => CoreError::Api {
                message: format!("HTTP {status}: {message}"),
                status: Some(status),
            },
            salesdash_api::Error::Deserialization { message, body: _ } => {
                CoreError::InvalidPayload { message }
            }
        }
    }
}
