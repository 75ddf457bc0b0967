//! Port definition for fetching image bytes.

use async_trait::async_trait;

use crate::domain::entities::ImageBlob;
use crate::domain::errors::ImageFetchError;

/// Port for fetching one image.
/// Implementations share one connection pool across concurrent calls.
#[async_trait]
pub trait ImageSourcePort: Send + Sync {
    /// Fetches the raw bytes behind a resolved URL.
    async fn fetch(&self, url: &str) -> Result<ImageBlob, ImageFetchError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use parking_lot::Mutex;

    enum Reply {
        Bytes(&'static [u8]),
        Status(u16),
    }

    struct Route {
        reply: Reply,
        delay: Duration,
    }

    /// Mock image source with per-URL replies and delays.
    #[derive(Default)]
    pub struct MockImageSource {
        routes: HashMap<String, Route>,
        requests: AtomicUsize,
        completed: Mutex<Vec<String>>,
    }

    impl MockImageSource {
        /// Creates a mock with no routes; unknown URLs answer 404.
        pub fn new() -> Self {
            Self::default()
        }

        /// Serves bytes for the URL.
        #[must_use]
        pub fn with_image(self, url: &str, bytes: &'static [u8]) -> Self {
            self.with_delayed_image(url, bytes, Duration::ZERO)
        }

        /// Serves bytes for the URL after a delay.
        #[must_use]
        pub fn with_delayed_image(
            mut self,
            url: &str,
            bytes: &'static [u8],
            delay: Duration,
        ) -> Self {
            self.routes.insert(
                url.to_string(),
                Route {
                    reply: Reply::Bytes(bytes),
                    delay,
                },
            );
            self
        }

        /// Answers the URL with an error status.
        #[must_use]
        pub fn with_status(mut self, url: &str, status: u16) -> Self {
            self.routes.insert(
                url.to_string(),
                Route {
                    reply: Reply::Status(status),
                    delay: Duration::ZERO,
                },
            );
            self
        }

        /// Returns the number of fetches issued.
        pub fn requests(&self) -> usize {
            self.requests.load(Ordering::SeqCst)
        }

        /// Returns URLs in the order their fetches finished.
        pub fn completion_order(&self) -> Vec<String> {
            self.completed.lock().clone()
        }
    }

    #[async_trait]
    impl ImageSourcePort for MockImageSource {
        async fn fetch(&self, url: &str) -> Result<ImageBlob, ImageFetchError> {
            self.requests.fetch_add(1, Ordering::SeqCst);

            let Some(route) = self.routes.get(url) else {
                return Err(ImageFetchError::status(url, 404));
            };

            if !route.delay.is_zero() {
                tokio::time::sleep(route.delay).await;
            }

            self.completed.lock().push(url.to_string());

            match route.reply {
                Reply::Bytes(bytes) => Ok(ImageBlob::from(bytes)),
                Reply::Status(status) => Err(ImageFetchError::status(url, status)),
            }
        }
    }
}
