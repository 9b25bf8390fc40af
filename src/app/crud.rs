//! State transitions shared by the generic list and form views.
//!
//! Kept free of rendering so the list/form behavior can be tested against a
//! scripted backend.

use thiserror::Error;

use crate::api::{ApiError, ResourceApi};
use crate::model::{FormError, FormMode, FormValues, Resource};

/// What a list view currently shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<R> {
    pub records: Vec<R>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<R: Resource> ListState<R> {
    /// Initial state on mount, before the first fetch resolves.
    pub fn loading() -> Self {
        Self {
            records: Vec::new(),
            loading: true,
            error: None,
        }
    }

    /// Apply the result of the mount fetch.
    pub fn finish_load(&mut self, result: Result<Vec<R>, ApiError>) {
        self.loading = false;
        match result {
            Ok(records) => {
                self.records = records;
                self.error = None;
            }
            Err(err) => self.error = Some(err.user_message()),
        }
    }

    /// Apply the result of a delete. Failures leave the records untouched.
    pub fn finish_delete(&mut self, id: i64, result: Result<(), ApiError>) {
        match result {
            Ok(()) => self.records.retain(|record| record.id() != id),
            Err(err) => self.error = Some(err.user_message()),
        }
    }

    /// Nothing to list once loading is over, even alongside an error banner.
    pub fn shows_empty_state(&self) -> bool {
        !self.loading && self.records.is_empty()
    }

    pub fn find(&self, id: i64) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }
}

/// Confirmation text shown before deleting a record.
pub fn confirm_delete_message<R: Resource>(record: &R) -> String {
    format!("Are you sure you want to delete \"{}\"?", record.title())
}

/// Why a form submission did not go through.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Build the payload for `mode` from the form and send it.
pub async fn submit<R: Resource>(
    api: &ResourceApi<R>,
    mode: FormMode,
    values: &FormValues,
) -> Result<R, SubmitError> {
    values.check_required(&R::fields(mode))?;
    let record = match mode {
        FormMode::Create => api.create(&R::create_payload(values)?).await?,
        FormMode::Edit(id) => api.update(id, &R::update_payload(values)?).await?,
    };
    Ok(record)
}

/// Fetch the record behind an edit form and turn it into form values.
pub async fn load_form<R: Resource>(api: &ResourceApi<R>, id: i64) -> Result<FormValues, ApiError> {
    api.get_by_id(id).await.map(|record| record.to_form())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::MockTransport;
    use crate::api::{ApiClient, HttpMethod};
    use crate::model::{Product, User};

    fn product(id: i64, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: "d".to_string(),
            price: 1.0,
            category: "c".to_string(),
            tags: Vec::new(),
            in_stock: true,
            created_at: None,
        }
    }

    #[test]
    fn test_finish_load_replaces_records() {
        let mut state = ListState::<Product>::loading();
        assert!(state.loading);

        state.finish_load(Ok(vec![product(1, "a"), product(2, "b")]));
        assert!(!state.loading);
        assert_eq!(state.records.len(), 2);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_finish_load_error_keeps_empty_list() {
        let mut state = ListState::<Product>::loading();
        state.finish_load(Err(ApiError::Transport("Failed to fetch".to_string())));
        assert!(!state.loading);
        assert!(state.records.is_empty());
        assert_eq!(state.error.as_deref(), Some("Failed to fetch"));
        assert!(state.shows_empty_state());
    }

    #[test]
    fn test_empty_state_waits_for_load_and_clears_with_records() {
        let mut state = ListState::<Product>::loading();
        assert!(!state.shows_empty_state());

        state.finish_load(Ok(vec![]));
        assert!(state.shows_empty_state());

        state.finish_load(Ok(vec![product(1, "a")]));
        assert!(!state.shows_empty_state());

        state.finish_delete(1, Ok(()));
        assert!(state.shows_empty_state());
    }

    #[test]
    fn test_successful_delete_removes_only_that_record() {
        let mut state = ListState::<Product>::loading();
        state.finish_load(Ok(vec![product(1, "a"), product(2, "b"), product(3, "c")]));

        state.finish_delete(2, Ok(()));
        let ids: Vec<i64> = state.records.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(state.find(2).is_none());
    }

    #[test]
    fn test_failed_delete_shows_message_and_keeps_records() {
        let transport = MockTransport::new();
        transport.respond(404, r#"{"detail":"Product not found"}"#);
        let api = ApiClient::new("http://api.test", transport.clone()).products();

        let mut state = ListState::<Product>::loading();
        state.finish_load(Ok(vec![product(1, "a"), product(2, "b")]));
        let before = state.records.clone();

        let result = tokio_test::block_on(api.delete(2));
        state.finish_delete(2, result);

        assert_eq!(state.records, before);
        assert_eq!(state.error.as_deref(), Some("Product not found"));
    }

    #[test]
    fn test_confirm_message_names_record() {
        assert_eq!(
            confirm_delete_message(&product(1, "Desk Lamp")),
            "Are you sure you want to delete \"Desk Lamp\"?"
        );
    }

    #[test]
    fn test_submit_create_posts_parsed_tags() {
        let transport = MockTransport::new();
        transport.respond(
            200,
            r#"{"id":5,"name":"Cable","description":"USB-C","price":9.5,"category":"Accessories","tags":["a","b","c"],"in_stock":true}"#,
        );
        let api = ApiClient::new("http://api.test", transport.clone()).products();

        let form = Product::blank_form()
            .with_text("name", "Cable")
            .with_text("description", "USB-C")
            .with_text("price", "9.5")
            .with_text("category", "Accessories")
            .with_text("tags", "a, b ,, c");

        let created = tokio_test::block_on(submit(&api, FormMode::Create, &form)).unwrap();
        assert_eq!(created.id, 5);

        let request = &transport.requests()[0];
        assert_eq!(request.method, HttpMethod::Post);
        let body: serde_json::Value =
            serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["tags"], serde_json::json!(["a", "b", "c"]));
        assert_eq!(body["price"], 9.5);
    }

    #[test]
    fn test_submit_edit_user_without_password() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"id":3,"name":"Ada","email":"ada@x.io"}"#);
        let api = ApiClient::new("http://api.test", transport.clone()).users();

        let form = User::blank_form()
            .with_text("name", "Ada")
            .with_text("email", "ada@x.io");

        tokio_test::block_on(submit(&api, FormMode::Edit(3), &form)).unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.url, "http://api.test/users/3");
        let body: serde_json::Value =
            serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert!(body.get("password").is_none());
    }

    #[test]
    fn test_submit_form_error_sends_nothing() {
        let transport = MockTransport::new();
        let api = ApiClient::new("http://api.test", transport.clone()).products();

        let form = Product::blank_form()
            .with_text("name", "Cable")
            .with_text("description", "USB-C")
            .with_text("price", "-3")
            .with_text("category", "Accessories");

        let err = tokio_test::block_on(submit(&api, FormMode::Create, &form)).unwrap_err();
        assert_eq!(err.to_string(), "Price must be a non-negative number");
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_submit_missing_required_field() {
        let transport = MockTransport::new();
        let api = ApiClient::new("http://api.test", transport.clone()).users();

        let form = User::blank_form().with_text("name", "Ada");
        let err = tokio_test::block_on(submit(&api, FormMode::Create, &form)).unwrap_err();
        assert_eq!(err, SubmitError::Form(FormError::Missing { label: "Email" }));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_submit_server_rejection_is_verbatim() {
        let transport = MockTransport::new();
        transport.respond(400, r#"{"detail":"Email already registered"}"#);
        let api = ApiClient::new("http://api.test", transport.clone()).users();

        let form = User::blank_form()
            .with_text("name", "Ada")
            .with_text("email", "ada@x.io")
            .with_text("password", "pw");

        let err = tokio_test::block_on(submit(&api, FormMode::Create, &form)).unwrap_err();
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[test]
    fn test_load_form_prefills_from_record() {
        let transport = MockTransport::new();
        transport.respond(
            200,
            r#"{"id":3,"name":"Ada","email":"ada@x.io","password":"hunter2"}"#,
        );
        let api = ApiClient::new("http://api.test", transport.clone()).users();

        let form = tokio_test::block_on(load_form(&api, 3)).unwrap();
        assert_eq!(form.text("name"), "Ada");
        assert_eq!(form.text("password"), "");
    }
}
