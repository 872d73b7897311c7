//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                   - Home page (category links + full catalog)
//! GET  /health             - Health check
//!
//! # Catalog
//! GET  /foods              - All items
//! GET  /foods/{slug}       - Category page (fixed slug set)
//!
//! # Cart (HTMX fragments)
//! GET  /cart               - Cart page
//! GET  /cart/items         - Cart items fragment
//! GET  /cart/count         - Cart count badge fragment
//! POST /cart/add           - Add item (returns notice, triggers cart-updated)
//! POST /cart/remove        - Remove item (returns notice, triggers cart-updated)
//! ```

pub mod cart;
pub mod foods;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the food catalog routes router.
pub fn food_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(foods::index))
        .route("/{slug}", get(foods::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/items", get(cart::items))
        .route("/count", get(cart::count))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Catalog routes
        .nest("/foods", food_routes())
        // Cart routes
        .nest("/cart", cart_routes())
}
