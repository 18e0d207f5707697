//! Mock HTTP transport for testing.
//!
//! Responds from a programmable rule and records every dispatched request,
//! so tests can assert on call counts, paths, and attached credentials
//! without a live server.
//!
//! # Example
//!
//! ```ignore
//! use veripost::adapters::http::MockTransport;
//! use http::StatusCode;
//!
//! // 401 for stale credentials, 200 otherwise
//! let transport = MockTransport::respond_with(|request| {
//!     if request.bearer.as_deref() == Some("stale") {
//!         Ok(ApiResponse::new(StatusCode::UNAUTHORIZED, vec![]))
//!     } else {
//!         Ok(ApiResponse::new(StatusCode::OK, vec![]))
//!     }
//! });
//! ```

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use http::StatusCode;

use crate::ports::{ApiRequest, ApiResponse, HttpTransport, TransportError};

type Responder =
    Box<dyn Fn(&ApiRequest) -> Result<ApiResponse, TransportError> + Send + Sync>;

/// Scripted transport with request recording.
pub struct MockTransport {
    responder: Responder,
    requests: Mutex<Vec<ApiRequest>>,
    delay: Option<Duration>,
}

impl MockTransport {
    /// Responds to every request with the given status and empty body.
    pub fn with_status(status: StatusCode) -> Self {
        Self::respond_with(move |_| Ok(ApiResponse::new(status, Vec::new())))
    }

    /// Responds to every request with the given status and JSON body.
    pub fn with_json(status: StatusCode, body: serde_json::Value) -> Self {
        Self::respond_with(move |_| Ok(ApiResponse::new(status, body.to_string().into_bytes())))
    }

    /// Fails every request with the given transport error.
    pub fn with_error(error: TransportError) -> Self {
        Self::respond_with(move |_| Err(error.clone()))
    }

    /// Responds from an arbitrary rule over the incoming request.
    pub fn respond_with<F>(responder: F) -> Self
    where
        F: Fn(&ApiRequest) -> Result<ApiResponse, TransportError> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
            delay: None,
        }
    }

    /// Adds an artificial delay before each response, to hold a request in
    /// flight while a test does something else.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Every request dispatched so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests dispatched so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Number of requests dispatched to the given path.
    pub fn requests_to(&self, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.path == path)
            .count()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let response = (self.responder)(&request);
        self.requests.lock().unwrap().push(request);
        response
    }
}
