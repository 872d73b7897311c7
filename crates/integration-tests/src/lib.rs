//! Integration test support for Tiffin.
//!
//! Both apps are driven end-to-end against in-process mock services bound to
//! ephemeral ports: a mock Catalog Service that records every mutation it
//! sees, and a mock object-storage endpoint that counts uploads. The tests
//! observe the mocks to prove what did (and did not) go over the wire.

use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::HeaderMap,
    routing::{get, post, put},
};
use tokio::sync::Mutex;

/// Serve a router on an ephemeral local port and return its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

/// The two-item menu served by the mock Catalog Service.
#[must_use]
pub fn menu() -> serde_json::Value {
    serde_json::json!([
        {
            "_id": "1",
            "name": "Masala Dosa",
            "category": "Dosa",
            "cost": 120,
            "description": "Crisp dosa with potato filling",
            "image": "https://images.example.com/masala-dosa.jpg"
        },
        {
            "_id": "2",
            "name": "Idli",
            "category": "South Indian",
            "cost": 60,
            "description": "Steamed rice cakes",
            "image": "https://images.example.com/idli.jpg"
        }
    ])
}

/// Observations recorded by the mock Catalog Service.
#[derive(Default)]
pub struct MockCatalog {
    /// Number of `PUT /food/{id}` requests seen.
    pub put_hits: AtomicUsize,
    /// Number of `DELETE /food/{id}` requests seen.
    pub delete_hits: AtomicUsize,
    /// `Authorization` header of the last mutation.
    pub last_auth: Mutex<Option<String>>,
    /// JSON body of the last `PUT`.
    pub last_put_body: Mutex<Option<serde_json::Value>>,
}

impl MockCatalog {
    /// Total mutation requests seen.
    #[must_use]
    pub fn mutation_hits(&self) -> usize {
        self.put_hits.load(Ordering::SeqCst) + self.delete_hits.load(Ordering::SeqCst)
    }
}

/// Build a mock Catalog Service that serves [`menu`] and records mutations.
pub fn mock_catalog_router(state: Arc<MockCatalog>) -> Router {
    async fn list() -> Json<serde_json::Value> {
        Json(menu())
    }

    async fn update(
        State(state): State<Arc<MockCatalog>>,
        Path(_id): Path<String>,
        headers: HeaderMap,
        Json(body): Json<serde_json::Value>,
    ) -> Json<serde_json::Value> {
        state.put_hits.fetch_add(1, Ordering::SeqCst);
        *state.last_auth.lock().await = headers
            .get("authorization")
            .and_then(|h| h.to_str().ok())
            .map(String::from);
        *state.last_put_body.lock().await = Some(body);
        Json(serde_json::json!({"message": "Food updated"}))
    }

    async fn remove(
        State(state): State<Arc<MockCatalog>>,
        Path(_id): Path<String>,
        headers: HeaderMap,
    ) -> Json<serde_json::Value> {
        state.delete_hits.fetch_add(1, Ordering::SeqCst);
        *state.last_auth.lock().await = headers
            .get("authorization")
            .and_then(|h| h.to_str().ok())
            .map(String::from);
        Json(serde_json::json!({"message": "Food deleted"}))
    }

    Router::new()
        .route("/food", get(list))
        .route("/food/{id}", put(update).delete(remove))
        .with_state(state)
}

/// Observations recorded by the mock object-storage endpoint.
#[derive(Default)]
pub struct MockUploads {
    /// Number of upload POSTs seen.
    pub hits: AtomicUsize,
}

/// URL the mock storage hands back for every upload.
pub const UPLOADED_IMAGE_URL: &str = "https://storage.example.com/fresh.jpg";

/// Build a mock object-storage endpoint that counts uploads.
pub fn mock_upload_router(state: Arc<MockUploads>) -> Router {
    async fn upload(State(state): State<Arc<MockUploads>>) -> Json<serde_json::Value> {
        state.hits.fetch_add(1, Ordering::SeqCst);
        Json(serde_json::json!({"secure_url": UPLOADED_IMAGE_URL}))
    }

    Router::new()
        .route("/upload", post(upload))
        .with_state(state)
}

/// A `reqwest` client with a cookie store, so sessions stick across requests.
#[must_use]
pub fn browser() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("build HTTP client")
}
