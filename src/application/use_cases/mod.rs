//! Use case implementations.

mod fetch_catalog_use_case;
mod load_images_use_case;

pub use fetch_catalog_use_case::FetchCatalogUseCase;
pub use load_images_use_case::LoadImagesUseCase;
