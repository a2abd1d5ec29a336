//! Run API port — the test backend's HTTP contract.

use std::future::Future;
use std::rc::Rc;

use gpro_domain::run::{StartRequest, StatusResponse};

/// Error returned by [`RunApi`] calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never completed.
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Client for the test backend.
pub trait RunApi {
    /// `POST /api/start` with the JSON-encoded request. Only the status is checked.
    fn start(&self, request: &StartRequest) -> impl Future<Output = Result<(), ApiError>>;

    /// `POST /api/stop` with no body. Only the status is checked.
    fn stop(&self) -> impl Future<Output = Result<(), ApiError>>;

    /// `GET /api/status`.
    fn status(&self) -> impl Future<Output = Result<StatusResponse, ApiError>>;
}

impl<T: RunApi> RunApi for Rc<T> {
    fn start(&self, request: &StartRequest) -> impl Future<Output = Result<(), ApiError>> {
        (**self).start(request)
    }

    fn stop(&self) -> impl Future<Output = Result<(), ApiError>> {
        (**self).stop()
    }

    fn status(&self) -> impl Future<Output = Result<StatusResponse, ApiError>> {
        (**self).status()
    }
}
