//! Infrastructure layer with external service adapters.

/// Catalog HTTP client.
pub mod catalog;
/// Application configuration.
pub mod config;
/// Image fetching and decoding.
pub mod image;

pub use catalog::HttpCatalogClient;
pub use config::{AppConfig, CliArgs, ConfigError, ConfigLoader, LogLevel, UiConfig};
pub use image::{HttpImageSource, decode_preview};
