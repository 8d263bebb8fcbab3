use thiserror::Error;

/// Error type that captures common store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Failed to fetch {0}")]
    FetchFailed(&'static str),
    #[error("No session directory available")]
    NoSessionDir,
}
