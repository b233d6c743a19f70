//! Environment-driven settings for building the Scryfall client.

use scryfall_api::{default_user_agent, Client, Url, DEFAULT_BASE_URL};

use crate::error::CardLookupError;

pub const BASE_URL_VAR: &str = "SCRYFALL_BASE_URL";
pub const USER_AGENT_VAR: &str = "SCRYFALL_USER_AGENT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    pub base_url: String,
    pub user_agent: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: default_user_agent(),
        }
    }
}

impl LookupConfig {
    /// Reads `SCRYFALL_BASE_URL` and `SCRYFALL_USER_AGENT`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Like [`LookupConfig::from_env`], with variables supplied by `get`.
    /// Blank values count as unset.
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| get(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            base_url: read(BASE_URL_VAR).unwrap_or(defaults.base_url),
            user_agent: read(USER_AGENT_VAR).unwrap_or(defaults.user_agent),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    /// Checks that the base URL is an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), CardLookupError> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            CardLookupError::Config(format!("invalid base URL '{}': {}", self.base_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CardLookupError::Config(format!(
                "base URL '{}' must use http or https",
                self.base_url
            )));
        }
        Ok(())
    }

    /// Builds the HTTP client described by this configuration.
    pub fn client(&self) -> Result<Client, CardLookupError> {
        self.validate()?;
        tracing::debug!("Using Scryfall API at {}", self.base_url);
        Ok(Client::with_settings(&self.base_url, &self.user_agent)?)
    }
}
