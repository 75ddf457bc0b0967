//! HTTP image source.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::domain::entities::ImageBlob;
use crate::domain::errors::ImageFetchError;
use crate::domain::ports::ImageSourcePort;

/// Fetches image bytes over one shared connection pool.
#[derive(Clone)]
pub struct HttpImageSource {
    client: Client,
}

impl std::fmt::Debug for HttpImageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpImageSource").finish_non_exhaustive()
    }
}

impl HttpImageSource {
    /// Creates a source with transport defaults.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, ImageFetchError> {
        Self::with_options(None, None)
    }

    /// Creates a source with an optional timeout and user agent.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_options(
        timeout: Option<Duration>,
        user_agent: Option<&str>,
    ) -> Result<Self, ImageFetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder.build().map_err(|e| {
            ImageFetchError::client_setup(format!("failed to create HTTP client: {e}"))
        })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ImageSourcePort for HttpImageSource {
    async fn fetch(&self, url: &str) -> Result<ImageBlob, ImageFetchError> {
        debug!(url, "Downloading image");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ImageFetchError::request(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageFetchError::status(url, status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ImageFetchError::body(url, e.to_string()))?;

        debug!(url, bytes = bytes.len(), "Image downloaded");
        Ok(ImageBlob::new(bytes))
    }
}
