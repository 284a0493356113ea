//! DummyJSON quotes REST client implementation.

use std::sync::Arc;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;
use tokio::sync::Mutex;

use crate::cache::QuoteCache;
use crate::error::QuoteError;
use crate::rate_limit::{FixedWindow, RateLimitConfig};
use crate::rest::endpoints::{self, DUMMYJSON_BASE_URL};
use crate::rest::traits::QuotesApi;
use crate::rest::types::{Quote, QuotesPage};

/// The DummyJSON quotes REST client.
///
/// Every upstream request is gated by a fixed-window rate limiter, and quotes
/// fetched by id are remembered in a local cache so repeat lookups cost no
/// network call at all. Cloning the client is cheap; clones share one rate
/// limit window and one cache.
///
/// # Example
///
/// ```rust,no_run
/// use quotes_api_client::rest::QuoteClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = QuoteClient::new();
///
///     let page = client.list_all().await?;
///     println!("{} quotes upstream", page.total);
///
///     let quote = client.by_id(10).await?;
///     println!("{:?} — {:?}", quote.text(), quote.author());
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct QuoteClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    /// Request budget against the upstream, shared across clones
    limiter: Arc<Mutex<FixedWindow>>,
    /// Quotes previously fetched by id, shared across clones
    cache: Arc<Mutex<QuoteCache>>,
}

impl QuoteClient {
    /// Create a new client with default settings.
    ///
    /// Defaults: the public DummyJSON base URL and a budget of 10 requests
    /// per 60-second window. Use [`QuoteClient::builder()`] to change either.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> QuoteClientBuilder {
        QuoteClientBuilder::new()
    }

    /// List all quotes known upstream.
    ///
    /// Returns the full listing body (quotes plus total count) unmodified.
    pub async fn list_all(&self) -> Result<QuotesPage, QuoteError> {
        self.throttle().await;
        self.get_json(endpoints::QUOTES).await
    }

    /// Fetch a single random quote.
    pub async fn random(&self) -> Result<Quote, QuoteError> {
        self.throttle().await;
        self.get_json(endpoints::QUOTES_RANDOM).await
    }

    /// Fetch a quote by id.
    ///
    /// The local cache is consulted first; a hit returns immediately without
    /// touching the network or the rate limiter. On a miss the quote is
    /// fetched upstream and, when the body carries an id, cached for next
    /// time. An upstream 404 becomes [`QuoteError::NotFound`], distinct from
    /// the generic failure variants.
    pub async fn by_id(&self, id: u64) -> Result<Quote, QuoteError> {
        if let Some(cached) = self.cache.lock().await.lookup(id) {
            tracing::debug!(id, "quote served from local cache");
            return Ok(cached.clone());
        }

        tracing::debug!(id, "quote not in cache, fetching from upstream");
        self.throttle().await;

        match self.get_json::<Quote>(&endpoints::quote_by_id(id)).await {
            Ok(quote) => {
                if quote.id.is_some() {
                    self.cache.lock().await.insert(quote.clone());
                }
                Ok(quote)
            }
            Err(QuoteError::Status { status, .. }) if status == reqwest::StatusCode::NOT_FOUND => {
                Err(QuoteError::NotFound { id })
            }
            Err(error) => Err(error),
        }
    }

    /// Number of quotes currently held in the local cache.
    pub async fn cached_quotes(&self) -> usize {
        self.cache.lock().await.len()
    }

    /// Wait until the rate limiter grants a permit.
    ///
    /// The lock is dropped before sleeping so other tasks sharing this client
    /// keep making progress; they contend for the same window on their own
    /// acquires.
    async fn throttle(&self) {
        loop {
            let mut limiter = self.limiter.lock().await;
            match limiter.try_acquire() {
                Ok(()) => return,
                Err(wait_time) => {
                    drop(limiter);
                    tracing::warn!(
                        wait_secs = wait_time.as_secs_f64(),
                        "rate limit exceeded, waiting for the window to pass"
                    );
                    tokio::time::sleep(wait_time).await;
                }
            }
        }
    }

    /// Make a GET request and decode the JSON body.
    async fn get_json<T>(&self, endpoint: &str) -> Result<T, QuoteError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.http_client.get(&url).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(%status, endpoint, body, "upstream request failed");
            return Err(QuoteError::Status { status, body });
        }

        serde_json::from_str(&body).map_err(|e| {
            QuoteError::InvalidResponse(format!("failed to parse response: {e}. Body: {body}"))
        })
    }
}

impl Default for QuoteClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for QuoteClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuoteClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl QuotesApi for QuoteClient {
    async fn list_all(&self) -> Result<QuotesPage, QuoteError> {
        QuoteClient::list_all(self).await
    }

    async fn random(&self) -> Result<Quote, QuoteError> {
        QuoteClient::random(self).await
    }

    async fn by_id(&self, id: u64) -> Result<Quote, QuoteError> {
        QuoteClient::by_id(self, id).await
    }
}

/// Builder for [`QuoteClient`].
pub struct QuoteClientBuilder {
    base_url: String,
    rate_limit: RateLimitConfig,
    user_agent: Option<String>,
    max_retries: u32,
}

impl QuoteClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DUMMYJSON_BASE_URL.to_string(),
            rate_limit: RateLimitConfig::default(),
            user_agent: None,
            max_retries: 3,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the full rate limit configuration.
    pub fn rate_limit(mut self, config: RateLimitConfig) -> Self {
        self.rate_limit = config;
        self
    }

    /// Set the maximum upstream requests per window.
    pub fn max_requests(mut self, max_requests: u32) -> Self {
        self.rate_limit.max_requests = max_requests;
        self
    }

    /// Set the rate limit window duration in seconds.
    pub fn window_seconds(mut self, window_seconds: u64) -> Self {
        self.rate_limit.window_seconds = window_seconds;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the maximum number of retries for transient failures.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Build the client.
    pub fn build(self) -> QuoteClient {
        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("quotes-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("quotes-api-client"));
        headers.insert(USER_AGENT, header_value);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        // Build the HTTP client with middleware.
        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(self.max_retries);

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        QuoteClient {
            http_client: client,
            base_url: self.base_url,
            limiter: Arc::new(Mutex::new(FixedWindow::new(self.rate_limit))),
            cache: Arc::new(Mutex::new(QuoteCache::new())),
        }
    }
}

impl Default for QuoteClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
