//! In-memory REST backend for local development and integration tests.
//!
//! Serves the same `/products` and `/users` routes the admin UI talks to,
//! with the same response shapes and error bodies (`{"detail": ...}`).

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

#[derive(Debug, Clone, Serialize)]
pub struct StoredProduct {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub tags: Vec<String>,
    pub in_stock: bool,
    pub created_at: NaiveDateTime,
}

/// Users are returned with their stored password.
#[derive(Debug, Clone, Serialize)]
pub struct StoredUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
struct ProductCreate {
    name: String,
    description: String,
    price: f64,
    category: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default = "in_stock_default")]
    in_stock: bool,
}

fn in_stock_default() -> bool {
    true
}

/// Partial update: absent fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
struct ProductUpdate {
    name: Option<String>,
    description: Option<String>,
    price: Option<f64>,
    category: Option<String>,
    tags: Option<Vec<String>>,
    in_stock: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct UserCreate {
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Default, Deserialize)]
struct UserUpdate {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Default)]
struct Store {
    products: BTreeMap<i64, StoredProduct>,
    users: BTreeMap<i64, StoredUser>,
    last_product_id: i64,
    last_user_id: i64,
}

/// Handle to the shared in-memory store.
#[derive(Clone, Default)]
pub struct Backend {
    store: Arc<RwLock<Store>>,
}

impl Backend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a handful of sample products and users.
    ///
    /// Ids come from the same counters the create routes use.
    pub async fn seed_sample_data(&self) {
        let mut store = self.store.write().await;
        let products = [
            ("Wireless Headphones", "Over-ear, noise cancelling", 149.99, "Audio", &["premium", "audio"][..], true),
            ("Desk Lamp", "LED lamp with dimmer", 34.5, "Home", &["lighting"][..], true),
            ("Mechanical Keyboard", "Tenkeyless, brown switches", 89.0, "Computers", &[][..], false),
        ];
        for (name, description, price, category, tags, in_stock) in products {
            store.last_product_id += 1;
            let id = store.last_product_id;
            store.products.insert(
                id,
                StoredProduct {
                    id,
                    name: name.to_string(),
                    description: description.to_string(),
                    price,
                    category: category.to_string(),
                    tags: tags.iter().map(|tag| tag.to_string()).collect(),
                    in_stock,
                    created_at: now(),
                },
            );
        }

        let users = [
            ("Ada Lovelace", "ada@example.com", "analytical"),
            ("Grace Hopper", "grace@example.com", "compiler"),
        ];
        for (name, email, password) in users {
            store.last_user_id += 1;
            let id = store.last_user_id;
            store.users.insert(
                id,
                StoredUser {
                    id,
                    name: name.to_string(),
                    email: email.to_string(),
                    password: password.to_string(),
                    created_at: now(),
                },
            );
        }
        info!(
            "Seeded {} products and {} users",
            store.products.len(),
            store.users.len()
        );
    }

    /// Stored password of a user; the UI never reads it back.
    pub async fn user_password(&self, id: i64) -> Option<String> {
        let store = self.store.read().await;
        store.users.get(&id).map(|user| user.password.clone())
    }

    pub async fn product_count(&self) -> usize {
        self.store.read().await.products.len()
    }
}

#[derive(Debug, Error)]
enum BackendError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Unprocessable(String),
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        BackendError::Unprocessable(rejection.body_text())
    }
}

impl From<PathRejection> for BackendError {
    fn from(rejection: PathRejection) -> Self {
        BackendError::Unprocessable(rejection.body_text())
    }
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = match self {
            BackendError::NotFound(_) => StatusCode::NOT_FOUND,
            BackendError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };
        debug!("Rejecting request with {}: {}", status, self);
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

type Reply<T> = Result<Json<T>, BackendError>;

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// GET / - Welcome message
async fn root() -> Json<Value> {
    Json(json!({ "message": "Welcome to the Product CRUD API" }))
}

/// GET /health - Liveness check
async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

async fn list_products(State(backend): State<Backend>) -> Json<Vec<StoredProduct>> {
    let store = backend.store.read().await;
    Json(store.products.values().cloned().collect())
}

async fn get_product(
    State(backend): State<Backend>,
    id: Result<Path<i64>, PathRejection>,
) -> Reply<StoredProduct> {
    let Path(id) = id?;
    let store = backend.store.read().await;
    store
        .products
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(BackendError::NotFound("Product"))
}

async fn create_product(
    State(backend): State<Backend>,
    payload: Result<Json<ProductCreate>, JsonRejection>,
) -> Reply<StoredProduct> {
    let Json(payload) = payload?;
    let mut store = backend.store.write().await;
    store.last_product_id += 1;
    let product = StoredProduct {
        id: store.last_product_id,
        name: payload.name,
        description: payload.description,
        price: payload.price,
        category: payload.category,
        tags: payload.tags,
        in_stock: payload.in_stock,
        created_at: now(),
    };
    store.products.insert(product.id, product.clone());
    info!("Created product {}", product.id);
    Ok(Json(product))
}

async fn update_product(
    State(backend): State<Backend>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ProductUpdate>, JsonRejection>,
) -> Reply<StoredProduct> {
    let Path(id) = id?;
    let Json(changes) = payload?;
    let mut store = backend.store.write().await;
    let product = store
        .products
        .get_mut(&id)
        .ok_or(BackendError::NotFound("Product"))?;

    if let Some(name) = changes.name {
        product.name = name;
    }
    if let Some(description) = changes.description {
        product.description = description;
    }
    if let Some(price) = changes.price {
        product.price = price;
    }
    if let Some(category) = changes.category {
        product.category = category;
    }
    if let Some(tags) = changes.tags {
        product.tags = tags;
    }
    if let Some(in_stock) = changes.in_stock {
        product.in_stock = in_stock;
    }
    Ok(Json(product.clone()))
}

async fn delete_product(
    State(backend): State<Backend>,
    id: Result<Path<i64>, PathRejection>,
) -> Reply<Value> {
    let Path(id) = id?;
    let mut store = backend.store.write().await;
    store
        .products
        .remove(&id)
        .ok_or(BackendError::NotFound("Product"))?;
    info!("Deleted product {}", id);
    Ok(Json(json!({ "message": "Product deleted successfully" })))
}

async fn list_users(State(backend): State<Backend>) -> Json<Vec<StoredUser>> {
    let store = backend.store.read().await;
    Json(store.users.values().cloned().collect())
}

async fn get_user(
    State(backend): State<Backend>,
    id: Result<Path<i64>, PathRejection>,
) -> Reply<StoredUser> {
    let Path(id) = id?;
    let store = backend.store.read().await;
    store
        .users
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(BackendError::NotFound("User"))
}

async fn create_user(
    State(backend): State<Backend>,
    payload: Result<Json<UserCreate>, JsonRejection>,
) -> Reply<StoredUser> {
    let Json(payload) = payload?;
    let mut store = backend.store.write().await;
    store.last_user_id += 1;
    let user = StoredUser {
        id: store.last_user_id,
        name: payload.name,
        email: payload.email,
        password: payload.password,
        created_at: now(),
    };
    store.users.insert(user.id, user.clone());
    info!("Created user {}", user.id);
    Ok(Json(user))
}

async fn update_user(
    State(backend): State<Backend>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UserUpdate>, JsonRejection>,
) -> Reply<StoredUser> {
    let Path(id) = id?;
    let Json(changes) = payload?;
    let mut store = backend.store.write().await;
    let user = store
        .users
        .get_mut(&id)
        .ok_or(BackendError::NotFound("User"))?;

    if let Some(name) = changes.name {
        user.name = name;
    }
    if let Some(email) = changes.email {
        user.email = email;
    }
    if let Some(password) = changes.password {
        user.password = password;
    }
    Ok(Json(user.clone()))
}

async fn delete_user(
    State(backend): State<Backend>,
    id: Result<Path<i64>, PathRejection>,
) -> Reply<Value> {
    let Path(id) = id?;
    let mut store = backend.store.write().await;
    store.users.remove(&id).ok_or(BackendError::NotFound("User"))?;
    info!("Deleted user {}", id);
    Ok(Json(json!({ "message": "User deleted successfully" })))
}

/// Routes with permissive CORS so a browser build on another port can call them.
pub fn router(backend: Backend) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(backend)
}

/// Serve until `shutdown` is cancelled.
pub async fn serve(
    listener: TcpListener,
    backend: Backend,
    shutdown: CancellationToken,
) -> std::io::Result<()> {
    info!("Dev backend listening on {}", listener.local_addr()?);
    axum::serve(listener, router(backend))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
}
