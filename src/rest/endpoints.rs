//! DummyJSON quotes API endpoint constants.

/// Base URL for the DummyJSON API.
pub const DUMMYJSON_BASE_URL: &str = "https://dummyjson.com";

/// List all quotes.
pub const QUOTES: &str = "/quotes";

/// Fetch a single random quote.
pub const QUOTES_RANDOM: &str = "/quotes/random";

/// Fetch a single quote by id.
pub fn quote_by_id(id: u64) -> String {
    format!("/quotes/{id}")
}
