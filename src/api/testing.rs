//! Scripted transport for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use super::error::ApiError;
use super::http::{HttpRequest, HttpResponse};
use super::transport::Transport;

/// Replays queued responses in order and records every request it sees.
#[derive(Default)]
pub struct MockTransport {
    requests: RefCell<Vec<HttpRequest>>,
    responses: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
}

impl MockTransport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: impl Into<String>) {
        self.responses
            .borrow_mut()
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    pub fn fail(&self, message: &str) {
        self.responses
            .borrow_mut()
            .push_back(Err(ApiError::Transport(message.to_string())));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_string())))
    }
}
