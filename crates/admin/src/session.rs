//! Session-held operator state: the access token and flash notices.
//!
//! The token is issued elsewhere and pasted in by the operator; this module
//! only stores and reads it. Reads are defensive: a value that went through
//! an extra JSON encoding on its way in is unwrapped, anything else is used
//! as-is.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

/// Session keys for admin data.
pub mod keys {
    /// Key for the operator's access token.
    pub const TOKEN: &str = "token";

    /// Key for the one-shot flash notice.
    pub const FLASH: &str = "flash";
}

/// A one-shot notice shown on the next page load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flash {
    pub message: String,
    pub tone: String,
}

impl Flash {
    /// A success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            tone: "success".to_string(),
        }
    }

    /// An error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            tone: "error".to_string(),
        }
    }
}

/// Undo an accidental extra JSON encoding of the stored token.
///
/// A value stored as `"\"abc\""` decodes to `abc`; anything that is not a
/// JSON string literal is kept raw.
#[must_use]
pub fn decode_token(raw: &str) -> String {
    serde_json::from_str::<String>(raw).unwrap_or_else(|_| raw.to_string())
}

/// Normalize a token into an `Authorization` header value.
///
/// Tokens already carrying the `Bearer ` prefix are used verbatim.
#[must_use]
pub fn bearer_header(token: &str) -> String {
    if token.starts_with("Bearer ") {
        token.to_string()
    } else {
        format!("Bearer {token}")
    }
}

/// Read the operator token and shape it into an `Authorization` header.
///
/// Returns `None` when no usable token is stored; callers must abort before
/// issuing any network call in that case.
pub async fn auth_header(session: &Session) -> Option<String> {
    let raw = session.get::<String>(keys::TOKEN).await.ok().flatten()?;
    let token = decode_token(&raw);
    if token.trim().is_empty() {
        return None;
    }
    Some(bearer_header(&token))
}

/// Whether a token is currently stored.
pub async fn has_token(session: &Session) -> bool {
    auth_header(session).await.is_some()
}

/// Store the operator token as pasted.
pub async fn set_token(session: &Session, token: &str) {
    if let Err(e) = session.insert(keys::TOKEN, token).await {
        tracing::error!("Failed to store token in session: {e}");
    }
}

/// Remove the stored token.
pub async fn clear_token(session: &Session) {
    if let Err(e) = session.remove::<String>(keys::TOKEN).await {
        tracing::error!("Failed to clear token from session: {e}");
    }
}

/// Store a flash notice for the next page load.
pub async fn set_flash(session: &Session, flash: Flash) {
    if let Err(e) = session.insert(keys::FLASH, &flash).await {
        tracing::error!("Failed to store flash in session: {e}");
    }
}

/// Take the pending flash notice, if any.
pub async fn take_flash(session: &Session) -> Option<Flash> {
    session.remove::<Flash>(keys::FLASH).await.ok().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_token_unwraps_json_string() {
        assert_eq!(decode_token("\"abc123\""), "abc123");
    }

    #[test]
    fn test_decode_token_keeps_raw_value() {
        assert_eq!(decode_token("abc123"), "abc123");
        // Valid JSON that is not a string stays raw too
        assert_eq!(decode_token("{\"a\":1}"), "{\"a\":1}");
    }

    #[test]
    fn test_bearer_header_adds_prefix_once() {
        assert_eq!(bearer_header("abc"), "Bearer abc");
        assert_eq!(bearer_header("Bearer abc"), "Bearer abc");
    }
}
