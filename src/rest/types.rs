//! Wire types for the DummyJSON quotes API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single quote as returned by the upstream API.
///
/// The client only interprets the `id` field, which keys the local cache and
/// orders its entries. Everything else (quote text, author, and whatever the
/// upstream adds in the future) is carried through untouched in `fields`.
/// `id` is optional because the cache has to cope with records that lack one;
/// see [`QuoteCache::lookup`](crate::cache::QuoteCache::lookup).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Upstream identifier of the quote.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// All remaining fields of the upstream record, passed through as-is.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Quote {
    /// The quote text, if present.
    pub fn text(&self) -> Option<&str> {
        self.fields.get("quote").and_then(Value::as_str)
    }

    /// The author, if present.
    pub fn author(&self) -> Option<&str> {
        self.fields.get("author").and_then(Value::as_str)
    }
}

/// The upstream listing body: a page of quotes plus a total count.
///
/// DummyJSON also reports the `skip`/`limit` paging values it applied; they
/// default to zero when absent and are passed through to consumers unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotesPage {
    /// The quotes in this listing.
    pub quotes: Vec<Quote>,
    /// Total number of quotes known upstream.
    pub total: u64,
    /// Number of quotes skipped by the upstream.
    #[serde(default)]
    pub skip: u64,
    /// Page size applied by the upstream.
    #[serde(default)]
    pub limit: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_extra_fields_pass_through() {
        let body = r#"{"id": 1, "quote": "Stay curious.", "author": "Anon", "tag": "life"}"#;
        let quote: Quote = serde_json::from_str(body).unwrap();

        assert_eq!(quote.id, Some(1));
        assert_eq!(quote.text(), Some("Stay curious."));
        assert_eq!(quote.author(), Some("Anon"));
        assert_eq!(quote.fields.get("tag"), Some(&serde_json::json!("life")));

        // Round-trips with the unknown field intact.
        let value = serde_json::to_value(&quote).unwrap();
        assert_eq!(value["tag"], "life");
    }

    #[test]
    fn test_quote_without_id_decodes() {
        let quote: Quote = serde_json::from_str(r#"{"quote": "untagged"}"#).unwrap();
        assert_eq!(quote.id, None);
    }

    #[test]
    fn test_quotes_page_defaults_paging_fields() {
        let page: QuotesPage = serde_json::from_str(
            r#"{"quotes": [{"id": 1, "quote": "Q", "author": "A"}], "total": 1}"#,
        )
        .unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.skip, 0);
        assert_eq!(page.limit, 0);
        assert_eq!(page.quotes.len(), 1);
    }
}
