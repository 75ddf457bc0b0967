//! Application layer with use cases, services and the session state machine.

/// Data transfer objects.
pub mod dto;
/// Application services.
pub mod services;
/// Gallery session state machine.
pub mod session;
/// Use case implementations.
pub mod use_cases;

pub use dto::CatalogOutcome;
pub use services::{FetchMemo, ImageFetchPipeline, MemoStats};
pub use session::{GalleryRow, GallerySession, GalleryView, NO_DATA_NOTICE};
pub use use_cases::{FetchCatalogUseCase, LoadImagesUseCase};
