//! Access token handlers.
//!
//! Tokens are issued outside this panel; the operator pastes one in and the
//! session keeps it. Nothing here validates the token - the Catalog Service
//! is the judge of that.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, response::IntoResponse, response::Response};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::session::{self, Flash};

use super::flash_and_redirect;

/// Token page template.
#[derive(Template, WebTemplate)]
#[template(path = "token.html")]
pub struct TokenTemplate {
    pub flash: Option<Flash>,
    pub has_token: bool,
}

/// Token form data.
#[derive(Debug, Deserialize)]
pub struct TokenForm {
    pub token: String,
}

/// Display the token page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> impl IntoResponse {
    let flash = session::take_flash(&session).await;
    let has_token = session::has_token(&session).await;

    TokenTemplate { flash, has_token }
}

/// Store the pasted token in the session.
#[instrument(skip(session, form))]
pub async fn save(session: Session, Form(form): Form<TokenForm>) -> Response {
    let token = form.token.trim();
    if token.is_empty() {
        return flash_and_redirect(&session, Flash::error("Token cannot be empty"), "/token")
            .await;
    }

    session::set_token(&session, token).await;
    flash_and_redirect(&session, Flash::success("Token saved"), "/token").await
}

/// Forget the stored token.
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Response {
    session::clear_token(&session).await;
    flash_and_redirect(&session, Flash::success("Token cleared"), "/token").await
}
