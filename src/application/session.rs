//! Gallery session state machine.
//!
//! `LoadingRecords` -> `LoadingImages` -> `Ready`, with `Ready` looping on
//! filter changes. An image failure ends in `Failed`. Nothing leads back to
//! `LoadingRecords`.

use std::mem;

use tracing::{debug, info, warn};

use crate::application::dto::CatalogOutcome;
use crate::domain::entities::{ImageBlob, ImageCache, ProductRecord, ProductTable, SizeFilter};
use crate::domain::errors::ImageFetchError;

/// Notice shown when the catalog has no rows.
pub const NO_DATA_NOTICE: &str = "No data available.";

/// One visible gallery row.
#[derive(Debug, Clone, Copy)]
pub struct GalleryRow<'a> {
    /// Position in the full table.
    pub index: usize,
    /// The product.
    pub record: &'a ProductRecord,
    /// Its fetched image.
    pub image: Option<&'a ImageBlob>,
}

/// Loaded gallery data plus the current filter.
#[derive(Debug, Clone)]
pub struct GalleryView {
    table: ProductTable,
    urls: Vec<String>,
    images: ImageCache,
    filter: SizeFilter,
    failure: Option<String>,
}

impl GalleryView {
    fn new(table: ProductTable, images: ImageCache, failure: Option<String>) -> Self {
        let urls = table.resolved_urls();
        Self {
            table,
            urls,
            images,
            filter: SizeFilter::All,
            failure,
        }
    }

    /// Returns the full table.
    #[must_use]
    pub const fn table(&self) -> &ProductTable {
        &self.table
    }

    /// Returns the image lookup.
    #[must_use]
    pub const fn images(&self) -> &ImageCache {
        &self.images
    }

    /// Returns the active filter.
    #[must_use]
    pub const fn filter(&self) -> &SizeFilter {
        &self.filter
    }

    /// Returns the catalog failure message, if the load failed.
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Returns the dropdown options.
    #[must_use]
    pub fn filter_options(&self) -> Vec<SizeFilter> {
        self.table.filter_options()
    }

    /// Returns the rows passing the filter, in table order.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<GalleryRow<'_>> {
        self.table
            .iter()
            .zip(&self.urls)
            .enumerate()
            .filter(|(_, (record, _))| self.filter.matches(record.size()))
            .map(|(index, (record, url))| GalleryRow {
                index,
                record,
                image: self.images.get(url),
            })
            .collect()
    }
}

/// Session-scoped gallery state.
#[derive(Debug, Clone, Default)]
pub enum GallerySession {
    /// Waiting for the catalog.
    #[default]
    LoadingRecords,
    /// Catalog loaded, waiting for the image batch.
    LoadingImages {
        /// Rows whose images are being fetched.
        table: ProductTable,
    },
    /// Everything loaded.
    Ready(GalleryView),
    /// Image loading failed; nothing is shown.
    Failed {
        /// Failure description.
        reason: String,
    },
}

impl GallerySession {
    /// Creates a session waiting for the catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self::LoadingRecords
    }

    /// Short phase name for logs and the status bar.
    #[must_use]
    pub const fn phase(&self) -> &'static str {
        match self {
            Self::LoadingRecords => "loading-records",
            Self::LoadingImages { .. } => "loading-images",
            Self::Ready(_) => "ready",
            Self::Failed { .. } => "failed",
        }
    }

    /// Applies the catalog result.
    ///
    /// Returns the table whose images must be fetched next, or `None` when
    /// the session went straight to `Ready` (failed or empty catalog).
    pub fn records_loaded(&mut self, outcome: CatalogOutcome) -> Option<ProductTable> {
        if !matches!(self, Self::LoadingRecords) {
            warn!(phase = self.phase(), "Ignoring catalog result outside loading phase");
            return None;
        }

        let CatalogOutcome { table, failure } = outcome;

        if let Some(error) = failure {
            *self = Self::Ready(GalleryView::new(
                ProductTable::empty(),
                ImageCache::default(),
                Some(error.user_message().to_string()),
            ));
            return None;
        }

        if table.is_empty() {
            info!("Catalog is empty, skipping image phase");
            *self = Self::Ready(GalleryView::new(table, ImageCache::default(), None));
            return None;
        }

        debug!(rows = table.len(), "Entering image phase");
        *self = Self::LoadingImages {
            table: table.clone(),
        };
        Some(table)
    }

    /// Applies the image batch result.
    pub fn images_loaded(&mut self, result: Result<ImageCache, ImageFetchError>) {
        let Self::LoadingImages { .. } = self else {
            warn!(phase = self.phase(), "Ignoring image result outside image phase");
            return;
        };

        let Self::LoadingImages { table } = mem::take(self) else {
            return;
        };

        *self = match result {
            Ok(images) => {
                info!(rows = table.len(), images = images.len(), "Gallery ready");
                Self::Ready(GalleryView::new(table, images, None))
            }
            Err(e) => Self::Failed {
                reason: e.to_string(),
            },
        };
    }

    /// Changes the filter. Returns true if the visible rows may have changed.
    pub fn select_filter(&mut self, filter: SizeFilter) -> bool {
        let Self::Ready(view) = self else {
            return false;
        };

        if view.filter == filter {
            return false;
        }

        debug!(filter = %filter, "Filter changed");
        view.filter = filter;
        true
    }

    /// Returns the loaded view when ready.
    #[must_use]
    pub const fn view(&self) -> Option<&GalleryView> {
        match self {
            Self::Ready(view) => Some(view),
            _ => None,
        }
    }
}
