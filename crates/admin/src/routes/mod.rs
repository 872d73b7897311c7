//! HTTP route handlers for the admin panel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                   - Food list with edit/delete controls
//! GET  /health             - Health check
//!
//! # Item editing
//! GET  /foods/{id}/edit    - Edit form
//! POST /foods/{id}         - Update item (multipart, optional image file)
//! POST /foods/{id}/delete  - Delete item
//!
//! # Access token
//! GET  /token              - Token form
//! POST /token              - Store the pasted token in the session
//! POST /token/clear        - Forget the stored token
//! ```

pub mod foods;
pub mod token;

use axum::{
    Router,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use tower_sessions::Session;

use crate::session::{self, Flash};
use crate::state::AppState;

/// Stash a flash notice and redirect.
pub(crate) async fn flash_and_redirect(session: &Session, flash: Flash, to: &str) -> Response {
    session::set_flash(session, flash).await;
    Redirect::to(to).into_response()
}

/// Create the item editing routes router.
pub fn food_routes() -> Router<AppState> {
    Router::new()
        .route("/{id}", post(foods::update))
        .route("/{id}/edit", get(foods::edit))
        .route("/{id}/delete", post(foods::delete))
}

/// Create the token routes router.
pub fn token_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(token::show).post(token::save))
        .route("/clear", post(token::clear))
}

/// Create all routes for the admin panel.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Food list
        .route("/", get(foods::index))
        // Item editing
        .nest("/foods", food_routes())
        // Access token
        .nest("/token", token_routes())
}
