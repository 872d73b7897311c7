//! Catalog Service client and the in-memory catalog slice.
//!
//! # Architecture
//!
//! - The Catalog Service is the source of truth - no local sync, direct
//!   REST calls over `reqwest`
//! - The storefront only reads (`GET /food`); mutations live in the admin
//!   binary's client
//! - The last fetched list plus its status is held in [`CatalogSlice`],
//!   shared through application state

mod client;
mod slice;

pub use client::CatalogClient;
pub use slice::{CatalogSlice, CatalogState};

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::NotFound("food 64f1c0a2e4".to_string());
        assert_eq!(err.to_string(), "Not found: food 64f1c0a2e4");

        let err = CatalogError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Catalog service error (500): boom");
    }

    #[test]
    fn test_api_error_recovers_service_message() {
        let err = api_error(
            reqwest::StatusCode::UNAUTHORIZED,
            r#"{"message":"Invalid token"}"#,
        );
        assert!(matches!(
            err,
            CatalogError::Api { status: 401, ref message } if message == "Invalid token"
        ));
    }

    #[test]
    fn test_api_error_falls_back_to_raw_body() {
        let err = api_error(reqwest::StatusCode::BAD_GATEWAY, "<html>nope</html>");
        assert!(matches!(
            err,
            CatalogError::Api { status: 502, ref message } if message == "<html>nope</html>"
        ));
    }
}
