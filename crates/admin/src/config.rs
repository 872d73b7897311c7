//! Admin panel configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CATALOG_BASE_URL` - Base URL of the Catalog Service
//! - `UPLOAD_URL` - Object-storage upload endpoint (multipart POST)
//! - `UPLOAD_PRESET` - Upload preset name sent with each file
//! - `UPLOAD_CLOUD_NAME` - Storage account name sent with each file
//!
//! ## Optional
//! - `ADMIN_HOST` - Bind address (default: 127.0.0.1)
//! - `ADMIN_PORT` - Listen port (default: 3001)
//! - `ADMIN_BASE_URL` - Public URL for the panel (default: http://localhost:3001)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the admin panel
    pub base_url: String,
    /// Catalog Service configuration
    pub catalog: CatalogConfig,
    /// Object-storage upload configuration
    pub upload: UploadConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// Catalog Service configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the Catalog Service, without a trailing slash
    pub base_url: String,
}

/// Object-storage upload configuration.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Full URL of the upload endpoint
    pub url: String,
    /// Preset name included as a form field
    pub preset: String,
    /// Storage account name included as a form field
    pub cloud_name: String,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("ADMIN_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("ADMIN_PORT", "3001")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("ADMIN_BASE_URL", "http://localhost:3001");
        let catalog = CatalogConfig::new(&get_required_env("CATALOG_BASE_URL")?)?;
        let upload = UploadConfig::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            host,
            port,
            base_url,
            catalog,
            upload,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl CatalogConfig {
    /// Build a catalog configuration from a base URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the URL does not parse.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        url::Url::parse(base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("CATALOG_BASE_URL".to_string(), e.to_string())
        })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl UploadConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Self::new(
            &get_required_env("UPLOAD_URL")?,
            get_required_env("UPLOAD_PRESET")?,
            get_required_env("UPLOAD_CLOUD_NAME")?,
        )
    }

    /// Build an upload configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the endpoint URL does not parse.
    pub fn new(url: &str, preset: String, cloud_name: String) -> Result<Self, ConfigError> {
        url::Url::parse(url)
            .map_err(|e| ConfigError::InvalidEnvVar("UPLOAD_URL".to_string(), e.to_string()))?;

        Ok(Self {
            url: url.to_string(),
            preset,
            cloud_name,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
