//! Catalog load DTOs.

use crate::domain::entities::ProductTable;
use crate::domain::errors::CatalogError;

/// Result of loading the catalog.
///
/// A failed load still carries a table (the empty one) so the gallery can
/// render while showing the failure.
#[derive(Debug, Clone)]
pub struct CatalogOutcome {
    /// Loaded rows, empty on failure.
    pub table: ProductTable,
    /// Failure that replaced the table, if any.
    pub failure: Option<CatalogError>,
}

impl CatalogOutcome {
    /// Creates a successful outcome.
    #[must_use]
    pub const fn loaded(table: ProductTable) -> Self {
        Self {
            table,
            failure: None,
        }
    }

    /// Creates a failed outcome with an empty table.
    #[must_use]
    pub const fn failed(error: CatalogError) -> Self {
        Self {
            table: ProductTable::empty(),
            failure: Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_outcome_has_empty_table() {
        let outcome = CatalogOutcome::failed(CatalogError::status(500));

        assert!(outcome.failure.is_some());
        assert!(outcome.table.is_empty());
    }
}
