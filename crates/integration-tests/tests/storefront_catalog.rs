//! Integration tests for storefront browsing and the session cart.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use tiffin_integration_tests::{MockCatalog, browser, mock_catalog_router, serve};
use tiffin_storefront::config::{CatalogConfig, StorefrontConfig};
use tiffin_storefront::state::AppState;

/// Spin up a mock Catalog Service plus the storefront wired to it.
async fn storefront() -> (String, Arc<MockCatalog>) {
    let mock = Arc::new(MockCatalog::default());
    let catalog_url = serve(mock_catalog_router(mock.clone())).await;

    let config = StorefrontConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        catalog: CatalogConfig::new(&catalog_url).unwrap(),
        sentry_dsn: None,
    };
    let base_url = serve(tiffin_storefront::app(AppState::new(config))).await;

    (base_url, mock)
}

#[tokio::test]
async fn test_health() {
    let (base, _mock) = storefront().await;
    let resp = browser().get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_category_pages_show_exactly_their_items() {
    let (base, _mock) = storefront().await;
    let client = browser();

    let dosa = client
        .get(format!("{base}/foods/dosa"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(dosa.contains("Masala Dosa"));
    assert!(!dosa.contains("Idli"));

    let south = client
        .get(format!("{base}/foods/south-indian"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(south.contains("Idli"));
    assert!(!south.contains("Masala Dosa"));
}

#[tokio::test]
async fn test_unknown_category_is_404() {
    let (base, _mock) = storefront().await;
    let resp = browser()
        .get(format!("{base}/foods/burgers"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_prices_render_in_rupees() {
    let (base, _mock) = storefront().await;
    let body = browser()
        .get(format!("{base}/foods/dosa"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("Rs.120"));
}

#[tokio::test]
async fn test_cart_add_remove_round_trip() {
    let (base, _mock) = storefront().await;
    let client = browser();

    // Browse first so the catalog slice holds the menu for this app instance.
    client
        .get(format!("{base}/foods/dosa"))
        .send()
        .await
        .unwrap();

    // Add once
    let body = client
        .post(format!("{base}/cart/add"))
        .form(&[("food_id", "1")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("Added Masala Dosa to the cart"));

    let count = client
        .get(format!("{base}/cart/count"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(count.contains(">1<"));

    // Adding the same id again leaves the cart unchanged
    client
        .post(format!("{base}/cart/add"))
        .form(&[("food_id", "1")])
        .send()
        .await
        .unwrap();
    let count = client
        .get(format!("{base}/cart/count"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(count.contains(">1<"));

    // The cart page lists the item
    let cart_page = client
        .get(format!("{base}/cart"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(cart_page.contains("Masala Dosa"));
    assert!(cart_page.contains("Rs.120"));

    // Remove it
    let body = client
        .post(format!("{base}/cart/remove"))
        .form(&[("food_id", "1")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("Removed Masala Dosa from the cart"));

    // Removing an id that is not in the cart is a no-op
    client
        .post(format!("{base}/cart/remove"))
        .form(&[("food_id", "1")])
        .send()
        .await
        .unwrap();
    let count = client
        .get(format!("{base}/cart/count"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(count.contains(">0<"));
}

#[tokio::test]
async fn test_adding_unknown_item_notifies_without_cart_change() {
    let (base, _mock) = storefront().await;
    let client = browser();

    client.get(format!("{base}/foods/dosa")).send().await.unwrap();

    let resp = client
        .post(format!("{base}/cart/add"))
        .form(&[("food_id", "does-not-exist")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    assert!(resp.text().await.unwrap().contains("no longer available"));

    let count = client
        .get(format!("{base}/cart/count"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(count.contains(">0<"));
}
