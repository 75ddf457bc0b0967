//! Pure domain services.

pub mod link_normalizer;

pub use link_normalizer::{is_drive_link, normalize_link};
