//! Read-only REST client for the Catalog Service.

use std::sync::Arc;

use tracing::instrument;

use tiffin_core::FoodItem;

use super::{CatalogError, api_error};
use crate::config::CatalogConfig;

/// Client for the Catalog Service.
///
/// The storefront only lists items; create/update/delete are the admin
/// binary's privilege. One outstanding request per call - no retry, no
/// cancellation, no de-duplication of concurrent calls.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new Catalog Service client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
            }),
        }
    }

    /// Fetch the full item list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the service answers with a
    /// non-success status, or the body does not parse as an item list.
    #[instrument(skip(self))]
    pub async fn list_foods(&self) -> Result<Vec<FoodItem>, CatalogError> {
        let url = format!("{}/food", self.inner.base_url);

        let response = self.inner.client.get(&url).send().await?;
        let status = response.status();

        // Read the body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Catalog service returned non-success status"
            );
            return Err(api_error(status, &body));
        }

        let items: Vec<FoodItem> = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse catalog response"
            );
            CatalogError::Parse(e)
        })?;

        Ok(items)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{Json, Router, http::StatusCode, routing::get};

    use super::*;

    /// Serve a router on an ephemeral local port and return its base URL.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client_for(base_url: &str) -> CatalogClient {
        let config = CatalogConfig::new(base_url).unwrap();
        CatalogClient::new(&config)
    }

    #[tokio::test]
    async fn test_list_foods_parses_items() {
        let router = Router::new().route(
            "/food",
            get(|| async {
                Json(serde_json::json!([
                    {
                        "_id": "1",
                        "name": "Masala Dosa",
                        "category": "Dosa",
                        "cost": 120,
                        "description": "Crisp dosa",
                        "image": "https://images.example.com/1.jpg"
                    }
                ]))
            }),
        );
        let base = serve(router).await;

        let items = client_for(&base).list_foods().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Masala Dosa");
        assert_eq!(items[0].category, "Dosa");
    }

    #[tokio::test]
    async fn test_list_foods_surfaces_service_error() {
        let router = Router::new().route(
            "/food",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({"message": "database unavailable"})),
                )
            }),
        );
        let base = serve(router).await;

        let err = client_for(&base).list_foods().await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Api { status: 500, ref message } if message == "database unavailable"
        ));
    }

    #[tokio::test]
    async fn test_list_foods_rejects_malformed_body() {
        let router = Router::new().route("/food", get(|| async { "not json" }));
        let base = serve(router).await;

        let err = client_for(&base).list_foods().await.unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
