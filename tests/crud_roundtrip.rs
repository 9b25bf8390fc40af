//! End-to-end checks of the REST client against the in-memory backend over HTTP.

#![cfg(feature = "server")]

use std::rc::Rc;

use catalog_admin::api::transport::ReqwestTransport;
use catalog_admin::api::{ApiClient, ApiError};
use catalog_admin::app::crud::{load_form, submit, ListState, SubmitError};
use catalog_admin::backend::{self, Backend};
use catalog_admin::model::{FormMode, FormValues, Product, Resource, User};
use tokio_util::sync::CancellationToken;

struct Harness {
    backend: Backend,
    client: ApiClient,
    shutdown: CancellationToken,
}

impl Drop for Harness {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn start() -> Harness {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let backend = Backend::new();
    let shutdown = CancellationToken::new();

    tokio::spawn(backend::serve(listener, backend.clone(), shutdown.clone()));

    let client = ApiClient::new(&format!("http://{addr}/"), Rc::new(ReqwestTransport::new()));
    Harness {
        backend,
        client,
        shutdown,
    }
}

fn product_form(name: &str) -> FormValues {
    Product::blank_form()
        .with_text("name", name)
        .with_text("description", "Adjustable arm")
        .with_text("price", "24.5")
        .with_text("category", "Lighting")
        .with_text("tags", "desk, , lamp ")
}

#[tokio::test]
async fn test_created_product_is_listed_exactly_once() {
    let harness = start().await;
    let products = harness.client.products();

    let created = submit(&products, FormMode::Create, &product_form("Desk Lamp"))
        .await
        .unwrap();
    assert_eq!(created.tags, vec!["desk", "lamp"]);
    assert_eq!(created.price, 24.5);
    assert!(created.created_at.is_some());

    let listed = products.get_all().await.unwrap();
    assert_eq!(listed.iter().filter(|p| p.id == created.id).count(), 1);
}

#[tokio::test]
async fn test_deleted_product_is_gone_from_next_list() {
    let harness = start().await;
    let products = harness.client.products();

    let keep = submit(&products, FormMode::Create, &product_form("Keep"))
        .await
        .unwrap();
    let gone = submit(&products, FormMode::Create, &product_form("Drop"))
        .await
        .unwrap();

    products.delete(gone.id).await.unwrap();

    let ids: Vec<i64> = products.get_all().await.unwrap().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![keep.id]);
}

#[tokio::test]
async fn test_edit_form_round_trips_product() {
    let harness = start().await;
    let products = harness.client.products();

    let created = submit(&products, FormMode::Create, &product_form("Desk Lamp"))
        .await
        .unwrap();

    let mut form = load_form(&products, created.id).await.unwrap();
    assert_eq!(form.text("tags"), "desk, lamp");
    form.set_text("price", "19.99");
    form.set_flag("in_stock", false);

    let updated = submit(&products, FormMode::Edit(created.id), &form)
        .await
        .unwrap();
    assert_eq!(updated.price, 19.99);
    assert!(!updated.in_stock);
    assert_eq!(updated.name, "Desk Lamp");
}

#[tokio::test]
async fn test_user_password_only_changes_when_supplied() {
    let harness = start().await;
    let users = harness.client.users();

    let form = User::blank_form()
        .with_text("name", "Ada")
        .with_text("email", "ada@example.com")
        .with_text("password", "first-secret");
    let user = submit(&users, FormMode::Create, &form).await.unwrap();

    // Edit forms never pre-fill the password
    let mut edit = load_form(&users, user.id).await.unwrap();
    assert_eq!(edit.text("password"), "");
    edit.set_text("name", "Ada Lovelace");
    submit(&users, FormMode::Edit(user.id), &edit).await.unwrap();
    assert_eq!(
        harness.backend.user_password(user.id).await.as_deref(),
        Some("first-secret")
    );

    edit.set_text("password", "second-secret");
    let renamed = submit(&users, FormMode::Edit(user.id), &edit).await.unwrap();
    assert_eq!(renamed.name, "Ada Lovelace");
    assert_eq!(
        harness.backend.user_password(user.id).await.as_deref(),
        Some("second-secret")
    );
}

#[tokio::test]
async fn test_missing_record_message_is_verbatim_and_list_untouched() {
    let harness = start().await;
    let products = harness.client.products();

    submit(&products, FormMode::Create, &product_form("Only"))
        .await
        .unwrap();

    let mut state = ListState::<Product>::loading();
    state.finish_load(products.get_all().await);
    let before = state.records.clone();

    let result = products.delete(999).await;
    assert!(matches!(result, Err(ApiError::Status { status: 404, .. })));
    state.finish_delete(999, result);

    assert_eq!(state.records, before);
    assert_eq!(state.error.as_deref(), Some("Product not found"));
}

#[tokio::test]
async fn test_update_of_missing_user_surfaces_detail() {
    let harness = start().await;
    let users = harness.client.users();

    let form = User::blank_form()
        .with_text("name", "Ghost")
        .with_text("email", "ghost@example.com");
    let err = submit(&users, FormMode::Edit(42), &form).await.unwrap_err();

    assert!(matches!(err, SubmitError::Api(_)));
    assert_eq!(err.to_string(), "User not found");
}

#[tokio::test]
async fn test_unreachable_backend_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(&format!("http://{addr}"), Rc::new(ReqwestTransport::new()));
    let err = client.products().get_all().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert!(!err.user_message().is_empty());
}
