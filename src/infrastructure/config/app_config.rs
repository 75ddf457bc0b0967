//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::args::CliArgs;

const APP_NAME: &str = "catalog-gallery";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "linuxmobile";

/// Catalog endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/sweaters";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Catalog endpoint returning the product list.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds. Unset keeps the transport default.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Gallery title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Message shown while the catalog and images load.
    #[serde(default = "default_loading_message")]
    pub loading_message: String,

    /// Terminal rows reserved for each product image.
    #[serde(default = "default_image_height")]
    pub image_height: u16,

    /// Enable `TachyonFX` animations on the loading screen.
    #[serde(default = "default_true")]
    pub enable_animations: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            loading_message: default_loading_message(),
            image_height: default_image_height(),
            enable_animations: true,
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_user_agent() -> String {
    format!("{APP_NAME}/{}", env!("CARGO_PKG_VERSION"))
}

fn default_title() -> String {
    "Sweater List".to_string()
}

fn default_loading_message() -> String {
    "Please wait, we are fetching the catalog...".to_string()
}

const fn default_image_height() -> u16 {
    12
}

const fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(endpoint) = args.endpoint {
            self.endpoint = endpoint;
        }
        if let Some(timeout) = args.timeout {
            self.request_timeout_secs = Some(timeout);
        }
        if let Some(title) = args.title {
            self.ui.title = title;
        }
        if let Some(image_height) = args.image_height {
            self.ui.image_height = image_height;
        }
        if let Some(enable_animations) = args.enable_animations {
            self.ui.enable_animations = enable_animations;
        }
    }

    /// Returns the request timeout, if one is configured.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("catalog-gallery.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            endpoint: default_endpoint(),
            request_timeout_secs: None,
            user_agent: default_user_agent(),
            ui: UiConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_config_with_partial_fields() {
        let toml_content = r#"
            endpoint = "http://catalog.local/sweaters"
            request_timeout_secs = 15

            [ui]
            title = "Winter Stock"
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.endpoint, "http://catalog.local/sweaters");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.ui.title, "Winter Stock");
        assert_eq!(config.ui.image_height, 12);
        assert!(config.ui.enable_animations);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.request_timeout().is_none());
        assert!(config.user_agent.starts_with("catalog-gallery/"));
        assert_eq!(config.ui.title, "Sweater List");
    }

    #[test]
    fn test_args_override_config() {
        let mut config = AppConfig::default();
        let args = CliArgs::parse_from([
            "catalog-gallery",
            "--endpoint",
            "http://other/api",
            "--timeout",
            "5",
            "--log-level",
            "debug",
            "--title",
            "Shop",
        ]);

        config.merge_with_args(args);

        assert_eq!(config.endpoint, "http://other/api");
        assert_eq!(config.request_timeout_secs, Some(5));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.ui.title, "Shop");
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!(LogLevel::Trace.to_string(), "trace");
    }
}
