//! Catalog page handlers.
//!
//! Each page triggers a catalog fetch (the original fetched on mount), reads
//! a snapshot, filters by the page's category literal, and renders one of the
//! loading / error / empty / grid states.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use tower_sessions::Session;
use tracing::instrument;

use tiffin_core::{Cart, filter_by_category};

use crate::catalog::CatalogState;
use crate::error::AppError;
use crate::filters;
use crate::session;
use crate::state::AppState;

/// Category page registry: URL slug to the catalog's category literal.
const CATEGORIES: &[(&str, &str)] = &[
    ("dosa", "Dosa"),
    ("south-indian", "South Indian"),
    ("north-indian", "North Indian"),
    ("chinese", "Chinese"),
];

/// Resolve a URL slug to its category literal.
pub(crate) fn category_for_slug(slug: &str) -> Option<&'static str> {
    CATEGORIES
        .iter()
        .find(|(s, _)| *s == slug)
        .map(|(_, label)| *label)
}

/// Navigation links to the category pages.
pub(crate) fn category_links() -> Vec<CategoryLinkView> {
    CATEGORIES
        .iter()
        .map(|(slug, label)| CategoryLinkView { slug, label })
        .collect()
}

/// Format a cost as a display price.
pub(crate) fn format_price(cost: &Decimal) -> String {
    format!("Rs.{}", cost.normalize())
}

/// Category navigation link data for templates.
#[derive(Clone)]
pub struct CategoryLinkView {
    pub slug: &'static str,
    pub label: &'static str,
}

/// Food card display data for templates.
#[derive(Clone)]
pub struct FoodCardView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub description: String,
    pub image: String,
    pub in_cart: bool,
}

/// The three render states of a catalog page, flattened for templates.
pub struct CatalogView {
    pub loading: bool,
    pub error: Option<String>,
    pub foods: Vec<FoodCardView>,
}

impl CatalogView {
    /// Build the view for a snapshot, optionally narrowed to one category.
    pub(crate) fn build(snapshot: &CatalogState, cart: &Cart, category: Option<&str>) -> Self {
        match snapshot {
            CatalogState::Loading => Self {
                loading: true,
                error: None,
                foods: Vec::new(),
            },
            CatalogState::Failed(message) => Self {
                loading: false,
                error: Some(message.clone()),
                foods: Vec::new(),
            },
            CatalogState::Ready(items) => {
                let narrowed = match category {
                    Some(category) => filter_by_category(items, category),
                    None => items.clone(),
                };
                Self {
                    loading: false,
                    error: None,
                    foods: narrowed
                        .iter()
                        .map(|item| FoodCardView {
                            id: item.id.to_string(),
                            name: item.name.clone(),
                            price: format_price(&item.cost),
                            description: item.description.clone(),
                            image: item.image.clone(),
                            in_cart: cart.contains(&item.id),
                        })
                        .collect(),
                }
            }
        }
    }
}

/// Catalog listing page template (all items or one category).
#[derive(Template, WebTemplate)]
#[template(path = "foods/category.html")]
pub struct CategoryPageTemplate {
    pub title: String,
    pub links: Vec<CategoryLinkView>,
    pub loading: bool,
    pub error: Option<String>,
    pub foods: Vec<FoodCardView>,
}

/// Display all catalog items.
#[instrument(skip(state, session))]
pub async fn index(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    state.catalog().fetch_foods().await;
    let snapshot = state.catalog().snapshot().await;
    let cart = session::load_cart(&session).await;
    let view = CatalogView::build(&snapshot, &cart, None);

    CategoryPageTemplate {
        title: "All Items".to_string(),
        links: category_links(),
        loading: view.loading,
        error: view.error,
        foods: view.foods,
    }
}

/// Display one category page.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
) -> Response {
    let Some(category) = category_for_slug(&slug) else {
        return AppError::NotFound(format!("foods/{slug}")).into_response();
    };

    state.catalog().fetch_foods().await;
    let snapshot = state.catalog().snapshot().await;
    let cart = session::load_cart(&session).await;
    let view = CatalogView::build(&snapshot, &cart, Some(category));

    CategoryPageTemplate {
        title: category.to_string(),
        links: category_links(),
        loading: view.loading,
        error: view.error,
        foods: view.foods,
    }
    .into_response()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use tiffin_core::{FoodId, FoodItem};

    use super::*;

    fn item(id: &str, name: &str, category: &str) -> FoodItem {
        FoodItem {
            id: FoodId::new(id),
            name: name.to_owned(),
            category: category.to_owned(),
            cost: Decimal::new(1205, 1),
            description: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn test_category_for_slug() {
        assert_eq!(category_for_slug("dosa"), Some("Dosa"));
        assert_eq!(category_for_slug("south-indian"), Some("South Indian"));
        assert_eq!(category_for_slug("burgers"), None);
    }

    #[test]
    fn test_format_price_trims_trailing_zeros() {
        assert_eq!(format_price(&Decimal::new(120, 0)), "Rs.120");
        assert_eq!(format_price(&Decimal::new(4550, 2)), "Rs.45.5");
    }

    #[test]
    fn test_view_narrows_to_category_in_order() {
        let snapshot = CatalogState::Ready(vec![
            item("1", "Masala Dosa", "Dosa"),
            item("2", "Idli", "South Indian"),
            item("3", "Rava Dosa", "Dosa"),
        ]);
        let cart = Cart::new();

        let view = CatalogView::build(&snapshot, &cart, Some("Dosa"));
        assert!(!view.loading);
        assert!(view.error.is_none());
        let names: Vec<&str> = view.foods.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Masala Dosa", "Rava Dosa"]);
    }

    #[test]
    fn test_view_marks_cart_membership() {
        let snapshot = CatalogState::Ready(vec![item("1", "Masala Dosa", "Dosa")]);
        let mut cart = Cart::new();
        cart.add(item("1", "Masala Dosa", "Dosa"));

        let view = CatalogView::build(&snapshot, &cart, None);
        assert!(view.foods[0].in_cart);
    }

    #[test]
    fn test_view_failed_state() {
        let snapshot = CatalogState::Failed("boom".to_string());
        let view = CatalogView::build(&snapshot, &Cart::new(), None);
        assert_eq!(view.error.as_deref(), Some("boom"));
        assert!(view.foods.is_empty());
    }
}
