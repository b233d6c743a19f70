mod client;
mod errors;
mod fetch;
mod query;
pub mod types;
mod user_agent;
pub use self::client::{Client, DEFAULT_BASE_URL};
pub use self::errors::Error;
pub use self::fetch::FetchJson;
pub use self::query::{LookupMode, NamedQuery, Query};
pub use self::user_agent::default_user_agent;
pub use url::Url;
