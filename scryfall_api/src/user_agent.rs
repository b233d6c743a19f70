/// Stable identifier sent with every request. Scryfall asks clients to
/// identify themselves with an application-specific user agent.
pub fn default_user_agent() -> String {
    format!("cardlookup/{}", env!("CARGO_PKG_VERSION"))
}
