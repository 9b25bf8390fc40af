//! Transports execute one HTTP request each.
//!
//! - Browser (wasm32): the Fetch API through `web-sys`
//! - Server/native: `reqwest`
//!
//! No retries, timeouts or backoff are applied at this layer.

use std::rc::Rc;

use async_trait::async_trait;

use super::error::ApiError;
use super::http::{HttpRequest, HttpResponse};

/// Executes a single HTTP round trip.
///
/// Futures are not required to be `Send`: browser futures hold JS values.
#[async_trait(?Send)]
pub trait Transport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Transport for the current build target.
#[cfg(target_arch = "wasm32")]
pub fn default_transport() -> Rc<dyn Transport> {
    Rc::new(FetchTransport)
}

/// Transport for the current build target.
#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
pub fn default_transport() -> Rc<dyn Transport> {
    Rc::new(ReqwestTransport::new())
}

/// Transport for the current build target.
#[cfg(all(not(target_arch = "wasm32"), not(feature = "server")))]
pub fn default_transport() -> Rc<dyn Transport> {
    Rc::new(Unavailable)
}

// =============================================================================
// reqwest (server / native)
// =============================================================================

#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
pub use native::ReqwestTransport;

#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
mod native {
    use super::*;
    use crate::api::http::HttpMethod;
    use reqwest::{Client, Method};
    use tracing::warn;

    #[derive(Clone, Default)]
    pub struct ReqwestTransport {
        client: Client,
    }

    impl ReqwestTransport {
        pub fn new() -> Self {
            Self::with_client(Client::new())
        }

        pub fn with_client(client: Client) -> Self {
            Self { client }
        }
    }

    #[async_trait(?Send)]
    impl Transport for ReqwestTransport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            let method = match request.method {
                HttpMethod::Get => Method::GET,
                HttpMethod::Post => Method::POST,
                HttpMethod::Put => Method::PUT,
                HttpMethod::Delete => Method::DELETE,
            };

            let mut builder = self.client.request(method, &request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await.map_err(|e| {
                warn!(url = %request.url, "HTTP request failed: {}", e);
                ApiError::Transport(e.to_string())
            })?;

            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;

            Ok(HttpResponse { status, body })
        }
    }
}

// =============================================================================
// Fetch API (browser)
// =============================================================================

#[cfg(target_arch = "wasm32")]
pub use browser::FetchTransport;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::*;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    pub struct FetchTransport;

    /// Pull the message out of a thrown JS error (e.g. "Failed to fetch").
    fn js_error(value: JsValue) -> ApiError {
        let message = value
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .unwrap_or_else(|| format!("{:?}", value));
        ApiError::Transport(message)
    }

    #[async_trait(?Send)]
    impl Transport for FetchTransport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            let init = web_sys::RequestInit::new();
            init.set_method(request.method.as_str());
            if let Some(body) = &request.body {
                init.set_body(&JsValue::from_str(body));
            }

            let js_request =
                web_sys::Request::new_with_str_and_init(&request.url, &init).map_err(js_error)?;
            for (name, value) in &request.headers {
                js_request.headers().set(name, value).map_err(js_error)?;
            }

            let window = web_sys::window()
                .ok_or_else(|| ApiError::Transport("no window available".to_string()))?;
            let value = JsFuture::from(window.fetch_with_request(&js_request))
                .await
                .map_err(js_error)?;
            let response: web_sys::Response = value.dyn_into().map_err(js_error)?;

            let text = JsFuture::from(response.text().map_err(js_error)?)
                .await
                .map_err(js_error)?;

            Ok(HttpResponse {
                status: response.status(),
                body: text.as_string().unwrap_or_default(),
            })
        }
    }
}

// =============================================================================
// Builds with no HTTP stack
// =============================================================================

#[cfg(all(not(target_arch = "wasm32"), not(feature = "server")))]
struct Unavailable;

#[cfg(all(not(target_arch = "wasm32"), not(feature = "server")))]
#[async_trait(?Send)]
impl Transport for Unavailable {
    async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
        Err(ApiError::Transport(
            "no HTTP transport in this build (enable the `server` feature)".to_string(),
        ))
    }
}
