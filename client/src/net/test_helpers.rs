//! Stub backend shared by the API and page tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;

use super::api::{ApiClient, ApiResponse, ApiTransport, HttpRequest};
use crate::state::session::MemoryTokenStore;

pub const TEST_BASE_URL: &str = "http://backend.test/api";

#[derive(Default)]
struct StubInner {
    replies: VecDeque<Result<ApiResponse, String>>,
    requests: Vec<HttpRequest>,
}

/// Transport answering from a queue of canned replies and recording every
/// request. Clones share the queue and the log.
#[derive(Clone, Default)]
pub struct StubTransport {
    inner: Rc<RefCell<StubInner>>,
}

impl StubTransport {
    pub fn reply(self, status: u16, body: Value) -> Self {
        self.inner.borrow_mut().replies.push_back(Ok(ApiResponse { status, body }));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.inner.borrow_mut().replies.push_back(Err(message.to_owned()));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.inner.borrow().requests.clone()
    }
}

#[async_trait(?Send)]
impl ApiTransport for StubTransport {
    async fn send(&self, request: HttpRequest) -> Result<ApiResponse, String> {
        let mut inner = self.inner.borrow_mut();
        inner.requests.push(request);
        inner.replies.pop_front().unwrap_or_else(|| Err("no stubbed reply".to_owned()))
    }
}

pub fn stub_client(
    transport: &StubTransport,
    store: &MemoryTokenStore,
) -> ApiClient<StubTransport, MemoryTokenStore> {
    ApiClient::new(TEST_BASE_URL, transport.clone(), store.clone())
}
