//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::session;
use crate::state::AppState;

use super::foods::{CatalogView, CategoryLinkView, FoodCardView, category_links};

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub links: Vec<CategoryLinkView>,
    pub loading: bool,
    pub error: Option<String>,
    pub foods: Vec<FoodCardView>,
}

/// Display the home page: category links plus the full catalog grid.
#[instrument(skip(state, session))]
pub async fn home(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    state.catalog().fetch_foods().await;
    let snapshot = state.catalog().snapshot().await;
    let cart = session::load_cart(&session).await;
    let view = CatalogView::build(&snapshot, &cart, None);

    HomeTemplate {
        links: category_links(),
        loading: view.loading,
        error: view.error,
        foods: view.foods,
    }
}
