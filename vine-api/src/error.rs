//! Error types for the Vine API client.

use serde_json::Value;
use thiserror::Error;

/// Boxed cause carried by [`VineError::Transport`].
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Which half of a credential pair was missing at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingCredential {
    Username,
    Password,
}

impl std::fmt::Display for MissingCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Username => f.write_str("missing username"),
            Self::Password => f.write_str("missing password"),
        }
    }
}

/// Errors that can occur when interacting with the Vine API.
#[derive(Debug, Error)]
pub enum VineError {
    /// `login` was called with an empty username or password. Raised before
    /// any network activity.
    #[error("invalid credentials: {0}")]
    InvalidCredentials(MissingCredential),

    /// The HTTP exchange itself failed (DNS, connection refused, timeout, TLS).
    #[error("HTTP request failed: {0}")]
    Transport(#[source] TransportError),

    /// The response body was not valid JSON after identifier repair.
    #[error("malformed response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response envelope carried an `error` value.
    ///
    /// `error` is kept verbatim; it is usually a string but the service
    /// sometimes sends a structured message. `code` is the envelope's numeric
    /// `code` field when present.
    #[error("API error{}: {}", code_suffix(.code), error_text(.error))]
    Api {
        code: Option<i64>,
        error: Value,
    },

    /// File I/O error (session read/write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for other errors (e.g. missing config directory).
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for VineError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}

impl VineError {
    /// The error value reported by the service, if this is an API error.
    pub fn api_error(&self) -> Option<&Value> {
        match self {
            Self::Api { error, .. } => Some(error),
            _ => None,
        }
    }
}

fn code_suffix(code: &Option<i64>) -> String {
    code.map(|c| format!(" (code {c})")).unwrap_or_default()
}

fn error_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Convenience alias for `Result<T, VineError>`.
pub type Result<T> = std::result::Result<T, VineError>;
