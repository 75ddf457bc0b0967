//! Command line arguments.

use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command line overrides for the config file.
#[derive(Debug, Parser)]
#[command(
    name = "catalog-gallery",
    version,
    about = "A terminal gallery for browsing a remote product catalog",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Catalog endpoint URL.
    #[arg(short, long, value_name = "URL", env = "CATALOG_GALLERY_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Gallery title.
    #[arg(long)]
    pub title: Option<String>,

    /// Terminal rows reserved for each product image.
    #[arg(long, value_name = "ROWS")]
    pub image_height: Option<u16>,

    /// Enable `TachyonFX` animations.
    #[arg(long)]
    pub enable_animations: Option<bool>,
}
