//! Error types for pocketid-client.

/// Result type alias for pocketid-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for pocketid-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Create an error for a non-2xx upstream response.
    pub fn upstream(
        status: u16,
        method: impl Into<String>,
        path: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::Upstream {
            status,
            method: method.into(),
            path: path.into(),
            body: body.into(),
        })
    }

    /// Returns true if this is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self.kind, ErrorKind::Config(_))
    }

    /// Returns true if this is a health check failure.
    pub fn is_health_check(&self) -> bool {
        matches!(self.kind, ErrorKind::HealthCheck { .. })
    }

    /// Returns true if the request deadline elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Returns the upstream HTTP status code, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Upstream { status, .. } => Some(*status),
            ErrorKind::HealthCheck { status, .. } => *status,
            _ => None,
        }
    }
}

/// The kind of error that occurred.
///
/// `Clone` so the availability gate can hand the same probe failure to
/// every caller that joined the in-flight check.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ErrorKind {
    /// A required setting is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The `/healthz` probe failed.
    #[error("Pocket ID health check failed: {message}")]
    HealthCheck {
        status: Option<u16>,
        message: String,
    },

    /// Non-2xx response from a real operation. The display message embeds
    /// method, path, status, and raw body, in that order.
    #[error("Pocket ID {method} {path} failed ({status}): {body}")]
    Upstream {
        status: u16,
        method: String,
        path: String,
        body: String,
    },

    /// The per-request deadline elapsed before the upstream answered.
    #[error("request timed out")]
    Timeout,

    /// Connection error.
    #[error("connection error: {0}")]
    Connection(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Malformed binary payload (base64).
    #[error("base64 decode error: {0}")]
    Decode(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connection(err.to_string())
        } else if err.is_decode() {
            ErrorKind::Json(err.to_string())
        } else {
            ErrorKind::Other(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Error::with_source(ErrorKind::Decode(err.to_string()), err)
    }
}
