//! The JSON-fetching collaborator that lookups depend on.

use std::future::Future;

use serde_json::Value;
use url::Url;

use crate::{client::DEFAULT_BASE_URL, Error};

/// Performs a single `GET <url>` and returns the parsed JSON body.
///
/// Implementations signal every failure (network, non-success status,
/// malformed body) through [`Error`]. Callers perform exactly one attempt;
/// retries, if any, belong to the implementation.
pub trait FetchJson {
    /// Base URL that query paths are resolved against.
    fn base_url(&self) -> &str {
        DEFAULT_BASE_URL
    }

    fn fetch_json(&self, url: &Url) -> impl Future<Output = Result<Value, Error>> + Send;
}
