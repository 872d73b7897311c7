//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::AdminClient;
use crate::config::AdminConfig;
use crate::services::ImageUploader;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; holds the configuration and the two external
/// service clients.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    catalog: AdminClient,
    images: ImageUploader,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        let catalog = AdminClient::new(&config.catalog);
        let images = ImageUploader::new(&config.upload);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                images,
            }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the Catalog Service client.
    #[must_use]
    pub fn catalog(&self) -> &AdminClient {
        &self.inner.catalog
    }

    /// Get a reference to the image uploader.
    #[must_use]
    pub fn images(&self) -> &ImageUploader {
        &self.inner.images
    }
}
