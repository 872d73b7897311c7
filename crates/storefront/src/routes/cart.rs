//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself lives in the session; every add/remove answers with a
//! notice fragment and fires the `cart-updated` trigger so the count badge
//! and the cart page refresh themselves.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use tiffin_core::{Cart, FoodId};

use crate::catalog::CatalogState;
use crate::filters;
use crate::session;
use crate::state::AppState;

use super::foods::format_price;

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub image: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub count: usize,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart
                .items()
                .iter()
                .map(|item| CartItemView {
                    id: item.id.to_string(),
                    name: item.name.clone(),
                    price: format_price(&item.cost),
                    image: item.image.clone(),
                })
                .collect(),
            subtotal: format_price(&cart.subtotal()),
            count: cart.len(),
        }
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub food_id: String,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub food_id: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: usize,
}

/// Notice fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/notice.html")]
pub struct NoticeTemplate {
    pub message: String,
    pub tone: &'static str,
}

/// Display cart page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> impl IntoResponse {
    let cart = session::load_cart(&session).await;

    CartShowTemplate {
        cart: CartView::from(&cart),
    }
}

/// Cart items fragment (HTMX refresh target).
#[instrument(skip(session))]
pub async fn items(session: Session) -> impl IntoResponse {
    let cart = session::load_cart(&session).await;

    CartItemsTemplate {
        cart: CartView::from(&cart),
    }
}

/// Cart count badge fragment (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> impl IntoResponse {
    let cart = session::load_cart(&session).await;

    CartCountTemplate { count: cart.len() }
}

/// Add an item to the cart (HTMX).
///
/// Looks the item up in the current catalog snapshot; adding an id already in
/// the cart leaves the cart unchanged but still notifies.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Response {
    let CatalogState::Ready(foods) = state.catalog().snapshot().await else {
        return (
            StatusCode::CONFLICT,
            NoticeTemplate {
                message: "The menu is still loading, try again".to_string(),
                tone: "error",
            },
        )
            .into_response();
    };

    let id = FoodId::new(form.food_id);
    let Some(item) = foods.iter().find(|item| item.id == id).cloned() else {
        return (
            StatusCode::NOT_FOUND,
            NoticeTemplate {
                message: "That item is no longer available".to_string(),
                tone: "error",
            },
        )
            .into_response();
    };

    let mut cart = session::load_cart(&session).await;
    let name = item.name.clone();
    cart.add(item);

    if let Err(e) = session::save_cart(&session, &cart).await {
        tracing::error!("Failed to save cart to session: {e}");
    }

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        NoticeTemplate {
            message: format!("Added {name} to the cart"),
            tone: "success",
        },
    )
        .into_response()
}

/// Remove an item from the cart (HTMX).
///
/// Removing an id that is not in the cart leaves the cart unchanged.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Response {
    let mut cart = session::load_cart(&session).await;
    let id = FoodId::new(form.food_id);

    let notice = match cart.remove(&id) {
        Some(item) => NoticeTemplate {
            message: format!("Removed {} from the cart", item.name),
            tone: "warning",
        },
        None => NoticeTemplate {
            message: "That item was not in the cart".to_string(),
            tone: "warning",
        },
    };

    if let Err(e) = session::save_cart(&session, &cart).await {
        tracing::error!("Failed to save cart to session: {e}");
    }

    (AppendHeaders([("HX-Trigger", "cart-updated")]), notice).into_response()
}
