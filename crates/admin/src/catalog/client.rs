//! REST client for the Catalog Service, including mutations.

use std::sync::Arc;

use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use tracing::instrument;

use tiffin_core::{FoodId, FoodInput, FoodItem};

use super::{CatalogError, api_error};
use crate::config::CatalogConfig;

/// Response envelope for update and delete calls.
///
/// The service answers mutations with a human-readable `message` and, for
/// updates, the stored item. Both are optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MutationResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub food: Option<FoodItem>,
}

/// Client for the Catalog Service with mutation privileges.
///
/// Mutations carry the operator's bearer token; the caller is responsible for
/// refusing to get this far without one.
#[derive(Clone)]
pub struct AdminClient {
    inner: Arc<AdminClientInner>,
}

struct AdminClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl AdminClient {
    /// Create a new Catalog Service client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            inner: Arc::new(AdminClientInner {
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
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Catalog service returned non-success status"
            );
            return Err(api_error(status, &body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Replace the editable fields of one item.
    ///
    /// `auth_header` is the full `Bearer ...` value from the operator's
    /// session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service rejects it.
    #[instrument(skip(self, input, auth_header), fields(id = %id))]
    pub async fn update_food(
        &self,
        id: &FoodId,
        input: &FoodInput,
        auth_header: &str,
    ) -> Result<MutationResponse, CatalogError> {
        let url = format!("{}/food/{}", self.inner.base_url, id);

        let response = self
            .inner
            .client
            .put(&url)
            .header(AUTHORIZATION, auth_header)
            .json(input)
            .send()
            .await?;

        Self::mutation_response(response).await
    }

    /// Delete one item.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the service rejects it.
    #[instrument(skip(self, auth_header), fields(id = %id))]
    pub async fn delete_food(
        &self,
        id: &FoodId,
        auth_header: &str,
    ) -> Result<MutationResponse, CatalogError> {
        let url = format!("{}/food/{}", self.inner.base_url, id);

        let response = self
            .inner
            .client
            .delete(&url)
            .header(AUTHORIZATION, auth_header)
            .send()
            .await?;

        Self::mutation_response(response).await
    }

    /// Shared status/body handling for mutations.
    async fn mutation_response(
        response: reqwest::Response,
    ) -> Result<MutationResponse, CatalogError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Catalog service rejected mutation"
            );
            return Err(api_error(status, &body));
        }

        if body.trim().is_empty() {
            return Ok(MutationResponse::default());
        }

        Ok(serde_json::from_str(&body)?)
    }
}
