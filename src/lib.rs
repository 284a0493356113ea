//! # Quotes API Client
//!
//! An async Rust client for the [DummyJSON](https://dummyjson.com) quotes API.
//!
//! ## Features
//!
//! - List all quotes, fetch a random quote, fetch a quote by id
//! - Built-in fixed-window rate limiting for upstream requests
//! - Local lookup cache for quotes fetched by id (lazy sort, binary search)
//! - Small error taxonomy that keeps "not found" distinct from failures
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use quotes_api_client::rest::QuoteClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = QuoteClient::new();
//!     let quote = client.random().await?;
//!     println!("Quote: {:?}", quote);
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod error;
pub mod rate_limit;
pub mod rest;

// Re-export commonly used types at crate root
pub use error::QuoteError;
pub use rest::{Quote, QuoteClient, QuotesPage};

/// Result type alias using QuoteError
pub type Result<T> = std::result::Result<T, QuoteError>;
