//! Catalog source port definition.

use async_trait::async_trait;

use crate::domain::entities::ProductTable;
use crate::domain::errors::CatalogError;

/// Port for retrieving the product list.
#[async_trait]
pub trait CatalogPort: Send + Sync {
    /// Fetches the full product list in server order.
    async fn fetch_products(&self) -> Result<ProductTable, CatalogError>;
}
