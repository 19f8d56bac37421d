use std::time::Duration;

use async_trait::async_trait;
use axum::body::Bytes;
use axum::http::StatusCode;

use crate::error::{AppError, AppResult};
use crate::models::ProductPayload;

/// Upstream answer, kept opaque so the proxy can relay it verbatim.
#[derive(Debug, Clone)]
pub struct CatalogResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Nomenclature-creation seam over the external catalog API.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Create the given records. A non-2xx upstream status is not an error
    /// here; it comes back inside [`CatalogResponse`] for the caller to relay.
    async fn create_nomenclature(&self, batch: &[ProductPayload]) -> AppResult<CatalogResponse>;
}

/// HTTP client for the TableCRM nomenclature endpoint. The access token is
/// passed as a query parameter and never leaves this client.
pub struct TableCrmClient {
    client: reqwest::Client,
    url: String,
    token: String,
}

impl TableCrmClient {
    pub fn new(url: impl Into<String>, token: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            url: url.into(),
            token: token.into(),
        }
    }
}

#[async_trait]
impl CatalogClient for TableCrmClient {
    async fn create_nomenclature(&self, batch: &[ProductPayload]) -> AppResult<CatalogResponse> {
        let response = self
            .client
            .post(&self.url)
            .query(&[("token", self.token.as_str())])
            .json(&batch)
            .send()
            .await
            .map_err(|e| super::upstream_error("catalog API", e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| {
                AppError::Upstream(format!(
                    "catalog API body did not arrive: {}",
                    e.without_url()
                ))
            })?;

        Ok(CatalogResponse { status, body })
    }
}
