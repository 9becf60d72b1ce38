use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Remote session not authenticated: {0}")]
    NotAuthenticated(String),

    #[error("Remote service rate limit exceeded, retry after {retry_after_seconds} seconds")]
    RateLimited { retry_after_seconds: u64 },

    #[error("Remote resource not found: {0}")]
    NotFound(String),

    #[error("Remote operation failed: {0}")]
    OperationFailed(String),

    #[error("Malformed remote payload: {0}")]
    Payload(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
