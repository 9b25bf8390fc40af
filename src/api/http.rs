//! HTTP requests and responses as plain data.
//!
//! The client builds an [`HttpRequest`] and hands it to a
//! [`Transport`](super::transport::Transport), which returns an
//! [`HttpResponse`]. Keeping both sides as data lets tests script the
//! backend without a network.

use serde::Serialize;

use super::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: String) -> Self {
        Self {
            method: HttpMethod::Get,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn delete(url: String) -> Self {
        Self {
            method: HttpMethod::Delete,
            ..Self::get(url)
        }
    }

    /// Request with a JSON-encoded body.
    pub fn json<T: Serialize>(method: HttpMethod, url: String, payload: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_string(payload).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(Self {
            method,
            url,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
