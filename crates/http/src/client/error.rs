//! Client error types

use thiserror::Error;

/// Transport-level client errors.
///
/// HTTP error statuses are NOT errors at this layer; they come back inside
/// [`super::typed::ApiResponse`] so flows can map them to user-facing text.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The bounded per-call timeout elapsed and the call was aborted
    #[error("request timed out")]
    Timeout,

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Configuration(String),
}
