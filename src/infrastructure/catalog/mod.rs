//! Catalog HTTP adapter.

mod client;
mod dto;

pub use client::HttpCatalogClient;
pub use dto::ProductRow;
