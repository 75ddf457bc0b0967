//! Catalog HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::dto::ProductRow;
use crate::domain::entities::{ProductRecord, ProductTable};
use crate::domain::errors::CatalogError;
use crate::domain::ports::CatalogPort;

/// HTTP client for the catalog endpoint.
pub struct HttpCatalogClient {
    client: Client,
    endpoint: String,
}

impl HttpCatalogClient {
    /// Creates a client for the endpoint with transport defaults.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, CatalogError> {
        Self::with_options(endpoint, None, None)
    }

    /// Creates a client with an optional timeout and user agent.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_options(
        endpoint: impl Into<String>,
        timeout: Option<Duration>,
        user_agent: Option<&str>,
    ) -> Result<Self, CatalogError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|e| CatalogError::client_setup(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Returns the configured endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn into_table(rows: Vec<ProductRow>) -> ProductTable {
        rows.into_iter()
            .enumerate()
            .filter_map(|(index, row)| {
                let record = ProductRecord::new(row.photo, row.size, row.price);
                if record.is_none() {
                    warn!(index, "Skipping catalog row without image link");
                }
                record
            })
            .collect()
    }
}

#[async_trait]
impl CatalogPort for HttpCatalogClient {
    async fn fetch_products(&self) -> Result<ProductTable, CatalogError> {
        debug!(endpoint = %self.endpoint, "Requesting catalog");

        let response = self.client.get(&self.endpoint).send().await.map_err(|e| {
            warn!(error = %e, "Failed to reach catalog endpoint");
            if e.is_timeout() {
                CatalogError::network("request timed out")
            } else if e.is_connect() {
                CatalogError::network("failed to connect to catalog")
            } else {
                CatalogError::network(e.to_string())
            }
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = %status, "Catalog endpoint returned non-200 status");
            return Err(CatalogError::status(status.as_u16()));
        }

        let rows: Vec<ProductRow> = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse catalog response");
            CatalogError::invalid_body(e.to_string())
        })?;

        let table = Self::into_table(rows);
        debug!(rows = table.len(), "Catalog parsed");

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Reply, TestServer};

    #[test]
    fn test_client_creation() {
        let client = HttpCatalogClient::new("http://127.0.0.1:5000/sweaters");
        assert!(client.is_ok());
        assert_eq!(client.unwrap().endpoint(), "http://127.0.0.1:5000/sweaters");
    }

    #[tokio::test]
    async fn test_parses_rows_in_order() {
        let server = TestServer::start(vec![(
            "/sweaters",
            Reply::json(
                r#"[
                    {"Sweater Photo":"http://x/a.png","Sweater Size":"M","Price":10},
                    {"Sweater Photo":"http://x/b.png","Sweater Size":"S","Price":"12.50"},
                    {"Sweater Photo":"http://x/c.png","Sweater Size":40,"Price":7.5}
                ]"#,
            ),
        )])
        .await;
        let client = HttpCatalogClient::new(server.url("/sweaters")).unwrap();

        let table = client.fetch_products().await.unwrap();
        let rows: Vec<_> = table.iter().collect();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].image_link(), "http://x/a.png");
        assert_eq!(rows[0].price_label(), "Price: 10");
        assert_eq!(rows[1].price_label(), "Price: 12.50");
        assert_eq!(rows[2].size(), "40");
    }

    #[tokio::test]
    async fn test_skips_rows_without_link() {
        let server = TestServer::start(vec![(
            "/sweaters",
            Reply::json(
                r#"[
                    {"Sweater Photo":"","Sweater Size":"M","Price":10},
                    {"Sweater Photo":"http://x/b.png","Sweater Size":"S","Price":5}
                ]"#,
            ),
        )])
        .await;
        let client = HttpCatalogClient::new(server.url("/sweaters")).unwrap();

        let table = client.fetch_products().await.unwrap();

        assert_eq!(table.len(), 1);
    }

    #[tokio::test]
    async fn test_non_200_is_failure() {
        let server = TestServer::start(vec![("/sweaters", Reply::status(500))]).await;
        let client = HttpCatalogClient::new(server.url("/sweaters")).unwrap();

        let result = client.fetch_products().await;

        assert!(matches!(
            result,
            Err(CatalogError::UnexpectedStatus { status: 500 })
        ));
    }

    #[tokio::test]
    async fn test_other_success_status_is_failure() {
        let server = TestServer::start(vec![("/sweaters", Reply::status(204))]).await;
        let client = HttpCatalogClient::new(server.url("/sweaters")).unwrap();

        let result = client.fetch_products().await;

        assert!(matches!(
            result,
            Err(CatalogError::UnexpectedStatus { status: 204 })
        ));
    }

    #[tokio::test]
    async fn test_invalid_body_is_failure() {
        let server =
            TestServer::start(vec![("/sweaters", Reply::json(r#"{"not":"a list"}"#))]).await;
        let client = HttpCatalogClient::new(server.url("/sweaters")).unwrap();

        let result = client.fetch_products().await;

        assert!(matches!(result, Err(CatalogError::InvalidBody { .. })));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_failure() -> Result<(), Box<dyn std::error::Error>> {
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        let url = format!("http://{}/sweaters", listener.local_addr()?);
        drop(listener);

        let client =
            HttpCatalogClient::with_options(url, Some(Duration::from_secs(5)), None).unwrap();
        let result = client.fetch_products().await;

        assert!(matches!(result, Err(CatalogError::Network { .. })));
        Ok(())
    }
}
