use thiserror::Error;

use crate::domain::ErrorDescriptor;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("API error {}: {} ({})", .0.code, .0.error_message, .0.error_type)]
    Api(ErrorDescriptor),

    #[error("No access token available")]
    MissingToken,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl FeedError {
    /// Structured `{code, error_type, error_message}` view of this error, as
    /// handed to the error display.
    pub fn descriptor(&self) -> ErrorDescriptor {
        match self {
            FeedError::Api(descriptor) => descriptor.clone(),
            FeedError::Http(e) if e.is_timeout() => {
                ErrorDescriptor::new(0, "TimeoutError", e.to_string())
            }
            FeedError::Http(e) => match e.status() {
                Some(status) => ErrorDescriptor::new(
                    i64::from(status.as_u16()),
                    "HttpError",
                    status.canonical_reason().unwrap_or("HTTP error"),
                ),
                None => ErrorDescriptor::new(0, "NetworkError", e.to_string()),
            },
            FeedError::Json(e) => ErrorDescriptor::new(0, "ParseError", e.to_string()),
            FeedError::MissingToken => {
                ErrorDescriptor::new(401, "MissingToken", "No stored access token")
            }
            other => ErrorDescriptor::new(0, "InternalError", other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, FeedError>;
