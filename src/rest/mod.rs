//! REST client for the DummyJSON quotes API.

mod client;
pub mod endpoints;
mod traits;
mod types;

pub use client::{QuoteClient, QuoteClientBuilder};
pub use traits::QuotesApi;
pub use types::{Quote, QuotesPage};
