//! Image fetch error types.

use thiserror::Error;

/// Failure of a single image fetch. Fails the whole batch it belongs to.
#[derive(Debug, Clone, Error)]
#[allow(missing_docs)]
pub enum ImageFetchError {
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error("failed to read body of {url}: {message}")]
    Body { url: String, message: String },

    #[error("failed to create image client: {message}")]
    ClientSetup { message: String },
}

impl ImageFetchError {
    /// Creates request error.
    #[must_use]
    pub fn request(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Request {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates unexpected status error.
    #[must_use]
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::UnexpectedStatus {
            url: url.into(),
            status,
        }
    }

    /// Creates body read error.
    #[must_use]
    pub fn body(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Body {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates client setup error.
    #[must_use]
    pub fn client_setup(message: impl Into<String>) -> Self {
        Self::ClientSetup {
            message: message.into(),
        }
    }

    /// Returns the URL that failed, if the error is tied to one.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Request { url, .. }
            | Self::UnexpectedStatus { url, .. }
            | Self::Body { url, .. } => Some(url),
            Self::ClientSetup { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_accessor() {
        assert_eq!(
            ImageFetchError::status("http://x/a.png", 404).url(),
            Some("http://x/a.png")
        );
        assert_eq!(ImageFetchError::client_setup("tls").url(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ImageFetchError::status("http://x/a.png", 404).to_string(),
            "http://x/a.png returned HTTP 404"
        );
    }
}
