use thiserror::Error;

/// Input problems caught before any request leaves the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a search query")]
    EmptyQuery,

    #[error("Please select an image or describe it for analysis")]
    MissingImage,

    #[error("Please select an image file (JPEG, PNG, etc.)")]
    NotAnImage { mime_type: String },

    #[error("Page limit must be between 1 and {max}, got {limit}")]
    PageLimit { limit: u32, max: u32 },
}

#[derive(Debug, Error)]
pub enum SeascopeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response. `detail` is the backend's `detail` field when the
    /// error body could be decoded.
    #[error("Server returned {status}: {reason}")]
    Status {
        status: u16,
        reason: String,
        detail: Option<String>,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unexpected response: {0}")]
    Application(String),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SeascopeError {
    /// HTTP status code for transport-level failures, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            SeascopeError::Status { status, .. } => Some(*status),
            SeascopeError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SeascopeError>;
