//! Error types for FrameStudio.

/// Top-level error type for the studio client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Backend call errors.
///
/// Every transport failure and every non-success HTTP status collapses into
/// this family; the wizard treats all of them uniformly (abandon the pending
/// action, log, stay on the current step).
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Request to {endpoint} failed: {reason}")]
    Request { endpoint: String, reason: String },

    #[error("Backend returned status {status} for {endpoint}")]
    Status { endpoint: String, status: u16 },

    #[error("Invalid JSON from {endpoint}: {reason}")]
    InvalidJson { endpoint: String, reason: String },
}

impl BackendError {
    /// The endpoint path the failing call was addressed to.
    pub fn endpoint(&self) -> &str {
        match self {
            Self::Request { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::InvalidJson { endpoint, .. } => endpoint,
        }
    }
}

/// Result type alias for the studio client.
pub type Result<T> = std::result::Result<T, Error>;
