//! REST client for the catalog backend.
//!
//! `ApiClient` holds the backend origin and a [`Transport`]. Each record kind
//! gets a typed [`ResourceApi`] with the same five operations:
//!
//! | Operation | Request |
//! |---|---|
//! | `get_all` | `GET /{collection}` |
//! | `get_by_id` | `GET /{collection}/{id}` |
//! | `create` | `POST /{collection}` |
//! | `update` | `PUT /{collection}/{id}` |
//! | `delete` | `DELETE /{collection}/{id}` |
//!
//! Every call is a single request. Non-2xx responses become
//! [`ApiError::Status`] carrying the backend's `detail` message.

pub mod error;
pub mod http;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

use std::marker::PhantomData;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::model::{Product, Resource, User};

pub use error::{ApiError, FALLBACK_MESSAGE};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{default_transport, Transport};

/// Client for one backend origin.
#[derive(Clone)]
pub struct ApiClient {
    base_url: Rc<str>,
    transport: Rc<dyn Transport>,
}

impl ApiClient {
    pub fn new(base_url: &str, transport: Rc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').into(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn resource<R: Resource>(&self) -> ResourceApi<R> {
        ResourceApi {
            client: self.clone(),
            _kind: PhantomData,
        }
    }

    pub fn products(&self) -> ResourceApi<Product> {
        self.resource()
    }

    pub fn users(&self) -> ResourceApi<User> {
        self.resource()
    }

    /// Execute a request and turn non-2xx responses into errors.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method.as_str();
        let url = request.url.clone();
        debug!(method, url = %url, "API request");

        let response = self.transport.execute(request).await?;
        if response.is_success() {
            debug!(method, url = %url, status = response.status, "API response");
            return Ok(response);
        }

        let err = ApiError::from_response(&response);
        warn!(method, url = %url, status = response.status, "API error: {}", err);
        Err(err)
    }
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && Rc::ptr_eq(&self.transport, &other.transport)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Typed operations for one record kind.
pub struct ResourceApi<R> {
    client: ApiClient,
    _kind: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceApi<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            _kind: PhantomData,
        }
    }
}

impl<R> PartialEq for ResourceApi<R> {
    fn eq(&self, other: &Self) -> bool {
        self.client == other.client
    }
}

impl<R: Resource> ResourceApi<R> {
    fn collection_url(&self) -> String {
        format!("{}/{}", self.client.base_url, R::COLLECTION)
    }

    fn record_url(&self, id: i64) -> String {
        format!("{}/{}/{}", self.client.base_url, R::COLLECTION, id)
    }

    /// All records, in the order the backend returns them.
    pub async fn get_all(&self) -> Result<Vec<R>, ApiError> {
        let response = self
            .client
            .send(HttpRequest::get(self.collection_url()))
            .await?;
        decode(&response)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<R, ApiError> {
        let response = self.client.send(HttpRequest::get(self.record_url(id))).await?;
        decode(&response)
    }

    /// Create a record; the returned record carries the server-assigned id.
    pub async fn create(&self, payload: &R::Create) -> Result<R, ApiError> {
        let request = HttpRequest::json(HttpMethod::Post, self.collection_url(), payload)?;
        let response = self.client.send(request).await?;
        decode(&response)
    }

    pub async fn update(&self, id: i64, payload: &R::Update) -> Result<R, ApiError> {
        let request = HttpRequest::json(HttpMethod::Put, self.record_url(id), payload)?;
        let response = self.client.send(request).await?;
        decode(&response)
    }

    /// Delete a record. The response body is ignored.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .send(HttpRequest::delete(self.record_url(id)))
            .await
            .map(|_| ())
    }
}
