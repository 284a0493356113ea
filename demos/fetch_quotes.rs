//! Fetch quotes from the live DummyJSON API.
//!
//! Run with: `cargo run --example fetch_quotes`

use quotes_api_client::rest::QuoteClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("quotes_api_client=debug")
        .init();

    let client = QuoteClient::new();

    let page = client.list_all().await?;
    println!("Upstream knows {} quotes", page.total);

    let random = client.random().await?;
    println!(
        "Random: {:?} — {}",
        random.text().unwrap_or("<no text>"),
        random.author().unwrap_or("unknown")
    );

    // The first lookup goes upstream, the second is answered from the cache.
    let quote = client.by_id(10).await?;
    println!("Quote 10: {:?}", quote.text());
    let again = client.by_id(10).await?;
    println!("Quote 10 again (cached): {:?}", again.text());
    println!("Cached quotes: {}", client.cached_quotes().await);

    Ok(())
}
