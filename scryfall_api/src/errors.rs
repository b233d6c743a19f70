//! Error types for the API client.

/// Errors that can occur when fetching a JSON document from Scryfall.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The base URL or query produced an unparseable URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// The HTTP request itself failed (connection, TLS, timeout).
    #[error("Request failed: {0}")]
    RequestFailed(String),
    /// Scryfall answered 404 for the lookup.
    #[error("Card not found: {details}")]
    NotFound { details: String },
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}: {body}")]
    HttpStatus { status: u16, body: String },
    /// The body could not be parsed as JSON.
    #[error("Failed to parse response: {0}")]
    Decode(String),
    /// The body parsed, but the top-level value is not a JSON object.
    #[error("Response body is not a JSON object")]
    NotAnObject,
}

impl Error {
    /// True when the remote service reported that no card matched.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
