//! Session-held state.
//!
//! The cart lives directly in the tower-sessions session; nothing about it is
//! persisted beyond the session store's lifetime.

use tower_sessions::Session;

use tiffin_core::Cart;

/// Session keys for storefront data.
pub mod keys {
    /// Key for storing the customer's cart.
    pub const CART: &str = "cart";
}

/// Load the cart from the session, defaulting to an empty one.
pub async fn load_cart(session: &Session) -> Cart {
    session
        .get::<Cart>(keys::CART)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Store the cart back into the session.
pub async fn save_cart(
    session: &Session,
    cart: &Cart,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::CART, cart).await
}
