//! In-memory cache of the last fetched item list plus its status.

use tokio::sync::RwLock;
use tracing::instrument;

use tiffin_core::FoodItem;

use super::CatalogClient;

/// Status of the catalog data.
///
/// Exactly one variant holds at any time: a fetch in flight, a usable list
/// (possibly empty), or the message of the last failure. Storing a success
/// clears any previous error and vice versa.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    /// A fetch is in flight.
    Loading,
    /// The last fetch succeeded.
    Ready(Vec<FoodItem>),
    /// The last fetch failed.
    Failed(String),
}

/// The catalog slice: one list, one status, one writer path.
///
/// Pages call [`fetch_foods`](Self::fetch_foods) on every view (the original
/// fetched on mount) and render from a [`snapshot`](Self::snapshot).
/// Concurrent requests may observe `Loading`; they are not de-duplicated.
pub struct CatalogSlice {
    state: RwLock<CatalogState>,
    client: CatalogClient,
}

impl CatalogSlice {
    /// Create a slice with an empty, ready list.
    #[must_use]
    pub fn new(client: CatalogClient) -> Self {
        Self {
            state: RwLock::new(CatalogState::Ready(Vec::new())),
            client,
        }
    }

    /// Issue one request to the Catalog Service and store the outcome.
    ///
    /// Sets `Loading`, then `Ready(items)` on success or `Failed(message)` on
    /// failure. No retry.
    #[instrument(skip(self))]
    pub async fn fetch_foods(&self) {
        *self.state.write().await = CatalogState::Loading;

        let next = match self.client.list_foods().await {
            Ok(items) => CatalogState::Ready(items),
            Err(e) => {
                tracing::warn!("Failed to fetch foods: {e}");
                CatalogState::Failed(e.to_string())
            }
        };

        *self.state.write().await = next;
    }

    /// Clone of the current state for rendering.
    pub async fn snapshot(&self) -> CatalogState {
        self.state.read().await.clone()
    }
}
