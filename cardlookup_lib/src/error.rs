//! Error types for the library layer.

use thiserror::Error;

/// Errors produced by the library layer. Lookup failures themselves are
/// never returned from construction; they are kept on the lookup.
#[derive(Error, Debug)]
pub enum CardLookupError {
    /// An error from the underlying API client.
    #[error("API error: {0}")]
    Api(#[from] scryfall_api::Error),
    /// User-provided input failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// An environment setting could not be used.
    #[error("Configuration error: {0}")]
    Config(String),
}
