//! Catalog fetch error types.

use thiserror::Error;

/// Failure to retrieve the product list.
#[derive(Debug, Clone, Error)]
#[allow(missing_docs)]
pub enum CatalogError {
    #[error("catalog endpoint returned HTTP {status}")]
    UnexpectedStatus { status: u16 },

    #[error("network error while fetching catalog: {message}")]
    Network { message: String },

    #[error("catalog response could not be parsed: {message}")]
    InvalidBody { message: String },

    #[error("failed to create catalog client: {message}")]
    ClientSetup { message: String },
}

impl CatalogError {
    /// Creates unexpected status error.
    #[must_use]
    pub const fn status(status: u16) -> Self {
        Self::UnexpectedStatus { status }
    }

    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates invalid body error.
    #[must_use]
    pub fn invalid_body(message: impl Into<String>) -> Self {
        Self::InvalidBody {
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

    /// Message shown to the user.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        "Failed to fetch data"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            CatalogError::status(503).to_string(),
            "catalog endpoint returned HTTP 503"
        );
        assert!(CatalogError::network("refused").to_string().contains("refused"));
    }
}
