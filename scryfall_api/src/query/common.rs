//! Shared query infrastructure: the [`Query`] trait.

use url::Url;

use crate::Error;

/// Trait implemented by all query builders. Provides URL serialization.
pub trait Query {
    /// Path of the endpoint, relative to the API base URL.
    fn path(&self) -> &'static str;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Resolves the endpoint against `base_url` and appends the parameters.
    fn to_url(&self, base_url: &str) -> Result<Url, Error> {
        let raw = format!("{}{}", base_url.trim_end_matches('/'), self.path());
        let url = Url::parse(&raw).map_err(|e| {
            tracing::error!("Invalid URL constructed from {}: {}", raw, e);
            Error::InvalidUrl(format!("{}: {}", raw, e))
        })?;
        Ok(self.add_to_url(&url))
    }
}
