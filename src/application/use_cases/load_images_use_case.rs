//! Image loading use case implementation.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::services::{ImageFetchPipeline, MemoStats};
use crate::domain::entities::{ImageCache, ProductTable};
use crate::domain::errors::ImageFetchError;

/// Resolves every row's image link and fetches the whole set.
#[derive(Clone)]
pub struct LoadImagesUseCase {
    pipeline: Arc<ImageFetchPipeline>,
}

impl LoadImagesUseCase {
    /// Creates new image loading use case.
    #[must_use]
    pub const fn new(pipeline: Arc<ImageFetchPipeline>) -> Self {
        Self { pipeline }
    }

    /// Fetches the images of every row and builds the URL lookup.
    ///
    /// # Errors
    /// Returns error if any single image cannot be fetched.
    pub async fn execute(&self, table: &ProductTable) -> Result<ImageCache, ImageFetchError> {
        let urls = table.resolved_urls();
        debug!(count = urls.len(), "Resolved image links");

        let blobs = self.pipeline.fetch_all(&urls).await?;
        let cache = ImageCache::from_fetch(&urls, &blobs);

        info!(
            images = cache.len(),
            bytes = cache.total_bytes(),
            memo = %self.memo_stats(),
            "Image cache built"
        );

        Ok(cache)
    }

    /// Returns the statistics of the pipeline's memo table.
    #[must_use]
    pub fn memo_stats(&self) -> MemoStats {
        self.pipeline.memo_stats()
    }
}
