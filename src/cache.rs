//! Local lookup cache for quotes fetched by id.
//!
//! The cache is a flat vector kept sorted by quote id so lookups run a binary
//! search. Sorting is lazy: inserts only append and set a dirty flag, and the
//! next lookup pays a single sort for however many inserts happened in
//! between. Entries live for the lifetime of the cache; there is no eviction.
//!
//! # Example
//!
//! ```rust
//! use quotes_api_client::cache::QuoteCache;
//! use quotes_api_client::rest::Quote;
//!
//! let mut cache = QuoteCache::new();
//! let quote: Quote = serde_json::from_str(
//!     r#"{"id": 3, "quote": "Be yourself.", "author": "Anon"}"#,
//! ).unwrap();
//!
//! cache.insert(quote);
//! assert!(cache.lookup(3).is_some());
//! assert!(cache.lookup(4).is_none());
//! ```

use crate::rest::Quote;

/// An in-memory store of quotes, unique by id, searched in O(log n).
#[derive(Debug, Default)]
pub struct QuoteCache {
    /// Cached quotes, sorted ascending by id whenever `needs_sort` is false
    entries: Vec<Quote>,
    /// Set when the store has been mutated since it was last sorted
    needs_sort: bool,
}

impl QuoteCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached quotes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the cache holds no quotes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a quote to the cache.
    ///
    /// Idempotent: a quote whose id is already cached is dropped, so ids stay
    /// unique and the binary search in [`lookup`](Self::lookup) stays valid.
    /// Quotes without an id are dropped as well. The store is re-sorted on
    /// the next lookup rather than here, batching consecutive inserts into a
    /// single sort.
    pub fn insert(&mut self, quote: Quote) {
        let Some(id) = quote.id else {
            tracing::debug!("quote without an id not cached");
            return;
        };
        if self.lookup(id).is_some() {
            return;
        }
        self.entries.push(quote);
        self.needs_sort = true;
        tracing::debug!(id, size = self.entries.len(), "quote added to cache");
    }

    /// Find a cached quote by id.
    ///
    /// An empty store answers immediately without paying the sort. Otherwise
    /// the store is sorted if dirty and then binary searched. A probed entry
    /// without an id means the ordering can no longer be trusted: the store
    /// is re-marked dirty for the next lookup and the search continues in the
    /// lower half.
    pub fn lookup(&mut self, id: u64) -> Option<&Quote> {
        if self.entries.is_empty() {
            return None;
        }

        self.sort_if_needed();

        let mut low = 0usize;
        let mut high = self.entries.len() - 1;
        let mut found = None;

        while low <= high {
            let mid = low + (high - low) / 2;
            let Some(mid_id) = self.entries[mid].id else {
                self.needs_sort = true;
                if mid == 0 {
                    break;
                }
                high = mid - 1;
                continue;
            };

            if mid_id == id {
                found = Some(mid);
                break;
            } else if mid_id < id {
                low = mid + 1;
            } else {
                if mid == 0 {
                    break;
                }
                high = mid - 1;
            }
        }

        found.map(|index| &self.entries[index])
    }

    /// Sort the store ascending by id if it is dirty.
    fn sort_if_needed(&mut self) {
        if self.needs_sort && !self.entries.is_empty() {
            tracing::debug!(size = self.entries.len(), "sorting quote cache by id");
            self.entries.sort_by_key(|quote| quote.id.unwrap_or(0));
            self.needs_sort = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(id: u64, text: &str) -> Quote {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "quote": text,
            "author": "Tester",
        }))
        .unwrap()
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut cache = QuoteCache::new();

        cache.insert(quote(1, "first"));
        cache.insert(quote(7, "seventh"));

        assert_eq!(cache.lookup(1).unwrap().text(), Some("first"));
        assert_eq!(cache.lookup(7).unwrap().text(), Some("seventh"));
        assert!(cache.lookup(3).is_none());
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut cache = QuoteCache::new();

        cache.insert(quote(5, "original"));
        cache.insert(quote(5, "duplicate"));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.lookup(5).unwrap().text(), Some("original"));
    }

    #[test]
    fn test_lookup_independent_of_insertion_order() {
        let mut cache = QuoteCache::new();

        cache.insert(quote(5, "five"));
        cache.insert(quote(2, "two"));
        cache.insert(quote(8, "eight"));

        assert_eq!(cache.lookup(2).unwrap().text(), Some("two"));
        assert_eq!(cache.lookup(8).unwrap().text(), Some("eight"));
        assert_eq!(cache.lookup(5).unwrap().text(), Some("five"));
    }

    #[test]
    fn test_quote_without_id_is_not_cached() {
        let mut cache = QuoteCache::new();

        let anonymous: Quote =
            serde_json::from_value(serde_json::json!({"quote": "no id here"})).unwrap();
        cache.insert(anonymous);

        assert!(cache.is_empty());
    }

    #[test]
    fn test_lookup_survives_entry_without_id() {
        let mut cache = QuoteCache::new();
        cache.insert(quote(1, "one"));
        cache.insert(quote(2, "two"));
        cache.insert(quote(3, "three"));

        // Force a sorted store, then corrupt the midpoint directly. Normal
        // operation cannot produce this; insert rejects id-less quotes.
        cache.lookup(1);
        cache.entries[1].id = None;

        assert!(cache.lookup(2).is_none());
        // The corrupt probe re-marks the store dirty for the next lookup.
        assert!(cache.needs_sort);
        // Other entries stay reachable.
        assert!(cache.lookup(1).is_some());
        assert!(cache.lookup(3).is_some());
    }

    #[test]
    fn test_many_interleaved_inserts_and_lookups() {
        let mut cache = QuoteCache::new();

        for id in [13u64, 4, 21, 9, 1, 17, 6] {
            cache.insert(quote(id, "q"));
        }
        for id in [1u64, 4, 6, 9, 13, 17, 21] {
            assert_eq!(cache.lookup(id).unwrap().id, Some(id));
        }
        assert!(cache.lookup(0).is_none());
        assert!(cache.lookup(22).is_none());
        assert_eq!(cache.len(), 7);
    }
}
