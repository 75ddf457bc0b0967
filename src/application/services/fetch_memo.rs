//! Memo table for completed image batches.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::domain::entities::ImageBlob;

/// Completed batches keyed by the exact URL list that produced them.
/// Entries are never evicted; the table lives as long as its owner.
#[derive(Default)]
pub struct FetchMemo {
    entries: RwLock<HashMap<Vec<String>, Arc<[ImageBlob]>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl FetchMemo {
    /// Creates an empty memo table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored batch for an equal URL list.
    pub fn get(&self, urls: &[String]) -> Option<Arc<[ImageBlob]>> {
        let entries = self.entries.read();
        if let Some(blobs) = entries.get(urls) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(count = urls.len(), "Fetch memo hit");
            Some(blobs.clone())
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            trace!(count = urls.len(), "Fetch memo miss");
            None
        }
    }

    /// Stores a completed batch.
    pub fn put(&self, urls: Vec<String>, blobs: Arc<[ImageBlob]>) {
        debug!(count = urls.len(), "Storing image batch in fetch memo");
        self.entries.write().insert(urls, blobs);
    }

    /// Returns the number of stored batches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if nothing was stored yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns memo statistics.
    #[must_use]
    pub fn stats(&self) -> MemoStats {
        MemoStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}

impl std::fmt::Debug for FetchMemo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchMemo")
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}

/// Memo table statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoStats {
    /// Lookups answered from the table.
    pub hits: u64,
    /// Lookups that required a fetch.
    pub misses: u64,
    /// Stored batches.
    pub entries: usize,
}

impl std::fmt::Display for MemoStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Memo: {} batches ({} hits, {} misses)",
            self.entries, self.hits, self.misses
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    fn blobs(items: &[&'static [u8]]) -> Arc<[ImageBlob]> {
        items.iter().map(|b| ImageBlob::from(*b)).collect()
    }

    #[test]
    fn test_put_and_get() {
        let memo = FetchMemo::new();
        memo.put(urls(&["a", "b"]), blobs(&[b"1", b"2"]));

        let found = memo.get(&urls(&["a", "b"])).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].as_bytes(), b"2");
    }

    #[test]
    fn test_key_is_exact_sequence() {
        let memo = FetchMemo::new();
        memo.put(urls(&["a", "b"]), blobs(&[b"1", b"2"]));

        assert!(memo.get(&urls(&["b", "a"])).is_none());
        assert!(memo.get(&urls(&["a"])).is_none());
        assert!(memo.get(&urls(&["a", "b", "b"])).is_none());
    }

    #[test]
    fn test_entries_accumulate() {
        let memo = FetchMemo::new();
        assert!(memo.is_empty());

        memo.put(urls(&["a"]), blobs(&[b"1"]));
        memo.put(urls(&["b"]), blobs(&[b"2"]));

        assert_eq!(memo.len(), 2);
        assert!(memo.get(&urls(&["a"])).is_some());
    }

    #[test]
    fn test_stats() {
        let memo = FetchMemo::new();
        memo.put(urls(&["a"]), blobs(&[b"1"]));

        let _ = memo.get(&urls(&["a"]));
        let _ = memo.get(&urls(&["missing"]));

        let stats = memo.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 1);
    }
}
