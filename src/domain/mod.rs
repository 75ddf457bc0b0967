//! Domain layer with core catalog entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Serde utilities.
pub mod serde_utils;
/// Pure domain services.
pub mod services;

pub use entities::{ImageBlob, ImageCache, ProductRecord, ProductTable, SizeFilter};
pub use errors::{CatalogError, ImageFetchError};
pub use ports::{CatalogPort, ImageSourcePort};
