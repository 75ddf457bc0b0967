//! Catalog fetch use case implementation.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::application::dto::CatalogOutcome;
use crate::domain::ports::CatalogPort;

/// Loads the product list once for the session.
#[derive(Clone)]
pub struct FetchCatalogUseCase {
    catalog: Arc<dyn CatalogPort>,
}

impl FetchCatalogUseCase {
    /// Creates new catalog use case.
    #[must_use]
    pub const fn new(catalog: Arc<dyn CatalogPort>) -> Self {
        Self { catalog }
    }

    /// Fetches the catalog. A failure yields an empty table plus the error.
    pub async fn execute(&self) -> CatalogOutcome {
        debug!("Fetching catalog");

        match self.catalog.fetch_products().await {
            Ok(table) => {
                info!(rows = table.len(), "Catalog loaded");
                CatalogOutcome::loaded(table)
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch catalog");
                CatalogOutcome::failed(e)
            }
        }
    }
}
