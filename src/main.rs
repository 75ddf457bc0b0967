use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use catalog_gallery::application::{FetchCatalogUseCase, ImageFetchPipeline, LoadImagesUseCase};
use catalog_gallery::infrastructure::{
    AppConfig, CliArgs, ConfigLoader, HttpCatalogClient, HttpImageSource,
};
use catalog_gallery::presentation::App;
use catalog_gallery::presentation::widgets::ImageManager;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<AppConfig> {
    let args = CliArgs::parse();

    let mut config = match (ConfigLoader::new(), args.config.as_deref()) {
        (Ok(loader), path) => loader.load_config(path)?,
        (Err(_), Some(path)) => ConfigLoader::with_dir(PathBuf::new()).load_config(Some(path))?,
        (Err(_), None) => AppConfig::default(),
    };
    config.merge_with_args(args);

    Ok(config)
}

fn build_use_cases(config: &AppConfig) -> Result<(FetchCatalogUseCase, LoadImagesUseCase)> {
    let timeout = config.request_timeout();
    let user_agent = Some(config.user_agent.as_str());

    let catalog = HttpCatalogClient::with_options(&config.endpoint, timeout, user_agent)?;
    let source = HttpImageSource::with_options(timeout, user_agent)?;
    let pipeline = Arc::new(ImageFetchPipeline::new(Arc::new(source)));

    Ok((
        FetchCatalogUseCase::new(Arc::new(catalog)),
        LoadImagesUseCase::new(pipeline),
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = load_config()?;
    init_logging(&config)?;

    info!(
        version = catalog_gallery::VERSION,
        endpoint = %config.endpoint,
        "Starting {}",
        catalog_gallery::NAME
    );

    let (fetch_catalog, load_images) = build_use_cases(&config)?;

    let mut terminal = ratatui::init();
    let images = ImageManager::new();
    info!(protocol = ?images.protocol_type(), "Image protocol selected");

    let app = App::new(fetch_catalog, load_images, config.ui, images);
    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
