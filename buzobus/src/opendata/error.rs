//! Open-data API error types.

/// Errors that can occur when fetching from the open-data API.
#[derive(Debug, thiserror::Error)]
pub enum OpenDataError {
    /// HTTP request failed (network error, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-200 status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
