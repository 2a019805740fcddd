use thiserror::Error;

/// Error types surfaced by the API client.
///
/// The `Display` text of every variant is the message shown to the user, so
/// transport and HTTP failures all collapse into one displayable shape.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced an HTTP response
    #[error("{0}")]
    Network(String),

    /// Non-2xx response; `message` comes from the body's `message`/`error`
    /// field or a generic status text
    #[error("{message}")]
    Http { status: u16, message: String },

    /// HTTP 401; the session has already been cleared when this is returned
    #[error("{0}")]
    Unauthorized(String),

    /// 2xx response whose body was not valid JSON
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Request body could not be serialized
    #[error("Failed to serialize request: {0}")]
    Encode(String),

    /// The owner of the request went away before it completed
    #[error("Request cancelled")]
    Cancelled,
}

impl ApiError {
    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Unauthorized(_) => Some(401),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }
}

/// Errors from persisted client storage.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to encode stored value: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors from the SKU generator.
#[derive(Error, Debug)]
pub enum SkuError {
    #[error("All {0} SKUs are already in use")]
    Exhausted(&'static str),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Type alias for Result with ApiError
pub type Result<T> = std::result::Result<T, ApiError>;
