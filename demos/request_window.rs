//! Demonstrate the fixed-window request budget.
//!
//! Configures a tiny budget (2 requests per 5 seconds) and issues three
//! requests: the third one visibly waits for the window to pass.
//!
//! Run with: `cargo run --example request_window`

use std::time::Instant;

use quotes_api_client::rate_limit::RateLimitConfig;
use quotes_api_client::rest::QuoteClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("quotes_api_client=debug")
        .init();

    let client = QuoteClient::builder()
        .rate_limit(RateLimitConfig {
            max_requests: 2,
            window_seconds: 5,
        })
        .build();

    for attempt in 1..=3 {
        let start = Instant::now();
        let quote = client.random().await?;
        println!(
            "request {attempt} took {:?}: {:?}",
            start.elapsed(),
            quote.text()
        );
    }

    Ok(())
}
