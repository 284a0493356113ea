//! Trait definition for the quotes client.
//!
//! This module provides the `QuotesApi` trait, the narrow surface an HTTP
//! routing layer (or any other consumer) programs against. This enables:
//! - Mock implementations for testing
//! - Decorator pattern wrappers
//! - Alternative implementations
//!
//! # Example
//!
//! ```rust,ignore
//! use quotes_api_client::rest::{QuoteClient, QuotesApi};
//!
//! async fn print_random<C: QuotesApi>(client: &C) -> Result<(), quotes_api_client::QuoteError> {
//!     let quote = client.random().await?;
//!     println!("{:?}", quote.text());
//!     Ok(())
//! }
//! ```

use std::future::Future;

use crate::error::QuoteError;
use crate::rest::{Quote, QuotesPage};

/// Trait defining the quote retrieval operations.
///
/// All methods are async and return `Result<T, QuoteError>`.
pub trait QuotesApi: Send + Sync {
    /// List all quotes known upstream.
    fn list_all(&self) -> impl Future<Output = Result<QuotesPage, QuoteError>> + Send;

    /// Fetch a single random quote.
    fn random(&self) -> impl Future<Output = Result<Quote, QuoteError>> + Send;

    /// Fetch a quote by id, serving from the local cache when possible.
    fn by_id(&self, id: u64) -> impl Future<Output = Result<Quote, QuoteError>> + Send;
}
