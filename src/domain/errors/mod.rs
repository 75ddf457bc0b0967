//! Domain error types.

mod catalog_error;
mod image_fetch_error;

pub use catalog_error::CatalogError;
pub use image_fetch_error::ImageFetchError;
