use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CloudError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("File access error for {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::core::config::ConfigError),
}

impl CloudError {
    /// Whether this failure happened on the wire (dial, timeout, reset, body read)
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::NetworkError(_) | Self::Timeout(_))
    }

    /// Map a reqwest failure into the transport class, keeping timeouts distinct
    pub(crate) fn from_transport(err: &reqwest::Error, timeout_seconds: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout_seconds)
        } else {
            Self::NetworkError(err.to_string())
        }
    }
}
