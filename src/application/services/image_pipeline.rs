//! Concurrent image fetch pipeline.
//!
//! Every URL of a batch is fetched at once over the shared image source and
//! the batch completes only when all fetches have. One failure fails the
//! batch. Completed batches are memoized by their exact URL list.

use std::sync::Arc;
use std::time::Instant;

use futures_util::future::try_join_all;
use tracing::{debug, error, info};

use crate::domain::entities::ImageBlob;
use crate::domain::errors::ImageFetchError;
use crate::domain::ports::ImageSourcePort;

use super::fetch_memo::{FetchMemo, MemoStats};

/// Fetches URL batches concurrently and remembers the results.
pub struct ImageFetchPipeline {
    source: Arc<dyn ImageSourcePort>,
    memo: FetchMemo,
}

impl std::fmt::Debug for ImageFetchPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageFetchPipeline")
            .field("memo", &self.memo)
            .finish_non_exhaustive()
    }
}

impl ImageFetchPipeline {
    /// Creates a pipeline with an empty memo table.
    #[must_use]
    pub fn new(source: Arc<dyn ImageSourcePort>) -> Self {
        Self {
            source,
            memo: FetchMemo::new(),
        }
    }

    /// Fetches every URL and returns the bytes in input order.
    ///
    /// A list equal to one fetched before is answered from the memo table
    /// without any request.
    ///
    /// # Errors
    /// Returns the first failure if any single fetch fails; no partial
    /// result is kept.
    pub async fn fetch_all(&self, urls: &[String]) -> Result<Arc<[ImageBlob]>, ImageFetchError> {
        if let Some(blobs) = self.memo.get(urls) {
            debug!(count = urls.len(), "Image batch served from memo");
            return Ok(blobs);
        }

        let started = Instant::now();
        info!(count = urls.len(), "Fetching image batch");

        let fetches = urls.iter().map(|url| self.source.fetch(url));
        let blobs: Arc<[ImageBlob]> = try_join_all(fetches)
            .await
            .inspect_err(|e| error!(error = %e, url = e.url(), "Image batch failed"))?
            .into();

        self.memo.put(urls.to_vec(), blobs.clone());

        info!(
            count = blobs.len(),
            bytes = blobs.iter().map(ImageBlob::len).sum::<usize>(),
            elapsed_ms = started.elapsed().as_millis(),
            "Image batch fetched"
        );

        Ok(blobs)
    }

    /// Returns memo table statistics.
    #[must_use]
    pub fn memo_stats(&self) -> MemoStats {
        self.memo.stats()
    }
}
