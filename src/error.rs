//! Error handling for the Race payment API client
//!
//! All failures surface through a single [`RacePayError`] enum. The variants
//! fall into three origins, exposed via [`RacePayError::kind`]:
//!
//! - **Local**: caller misuse detected before any network I/O (missing or
//!   malformed parameters, invalid configuration).
//! - **Remote**: an error reported by the API itself inside the response
//!   envelope. The server's `error_code`/`error_msg` are carried verbatim;
//!   the client never reinterprets or retries them.
//! - **Transport**: the HTTP round-trip or response decoding failed before
//!   an envelope could be resolved.

use thiserror::Error;

/// Result type for all racepay operations
pub type Result<T> = std::result::Result<T, RacePayError>;

/// Errors that can occur when talking to the Race payment API
#[derive(Debug, Error)]
pub enum RacePayError {
    /// A required parameter was missing or malformed. Raised synchronously,
    /// before any network request is made.
    #[error("Invalid parameter: {reason}")]
    InvalidParameter {
        /// What was wrong with the parameter
        reason: String,
    },

    /// The client configuration is invalid
    #[error("Configuration error: {reason}")]
    Config {
        /// What was wrong with the configuration
        reason: String,
    },

    /// The API reported an error inside the response envelope
    #[error("API error {code}: {msg}")]
    Api {
        /// Numeric error code assigned by the server
        code: i64,
        /// Human-readable message from the server
        msg: String,
    },

    /// The HTTP request itself failed (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not valid JSON or did not match the envelope
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response decoded as JSON but contained neither a `response`
    /// object nor an `error` object
    #[error("Malformed envelope: response contains neither result nor error")]
    MalformedEnvelope,
}

/// Origin of a [`RacePayError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Detected by this client before any network I/O
    Local,
    /// Reported by the remote API inside a response envelope
    Remote,
    /// The HTTP exchange or response decoding failed
    Transport,
}

impl RacePayError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Create a remote API error
    pub fn api(code: i64, msg: impl Into<String>) -> Self {
        Self::Api {
            code,
            msg: msg.into(),
        }
    }

    /// Which of the three failure origins this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidParameter { .. } | Self::Config { .. } => ErrorKind::Local,
            Self::Api { .. } => ErrorKind::Remote,
            Self::Http(_) | Self::Json(_) | Self::MalformedEnvelope => ErrorKind::Transport,
        }
    }

    /// The server-assigned error code, if this is a remote error
    pub fn api_code(&self) -> Option<i64> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}
