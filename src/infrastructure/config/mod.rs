//! Application configuration.

pub mod app_config;
pub mod args;
pub mod loader;

pub use app_config::{AppConfig, DEFAULT_ENDPOINT, LogLevel, UiConfig};
pub use args::CliArgs;
pub use loader::{ConfigError, ConfigLoader};
