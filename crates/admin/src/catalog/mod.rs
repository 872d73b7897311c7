//! Mutating Catalog Service client for the admin panel.
//!
//! # Architecture
//!
//! - Plain REST over `reqwest`; the Catalog Service owns persistence
//! - Mutations require a bearer token supplied by the operator's session -
//!   this binary holds the write privilege the storefront deliberately lacks

mod client;

pub use client::{AdminClient, MutationResponse};

use thiserror::Error;

/// Errors that can occur when talking to the Catalog Service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The service answered with a non-success status.
    #[error("Catalog service error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Build a [`CatalogError::Api`] from a response status and body.
///
/// The service reports failures as `{"message": "..."}`; when the body is not
/// that shape, the raw text (truncated) stands in.
pub(crate) fn api_error(status: reqwest::StatusCode, body: &str) -> CatalogError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message")?.as_str().map(String::from))
        .unwrap_or_else(|| body.chars().take(200).collect());

    CatalogError::Api {
        status: status.as_u16(),
        message,
    }
}
