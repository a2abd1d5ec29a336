//! HTTP client for the test backend, wrapping `gloo-net`.

use std::future::Future;

use gloo_net::http::{Request, Response};
use gpro_app::config::ApiConfig;
use gpro_app::ports::{ApiError, RunApi};
use gpro_domain::run::{StartRequest, StatusResponse};

/// [`RunApi`] speaking to the backend at the configured paths.
#[derive(Debug, Clone)]
pub struct HttpRunApi {
    endpoints: ApiConfig,
}

impl HttpRunApi {
    #[must_use]
    pub fn new(endpoints: ApiConfig) -> Self {
        Self { endpoints }
    }
}

fn api_error(err: gloo_net::Error) -> ApiError {
    match err {
        gloo_net::Error::SerdeError(err) => ApiError::Decode(err.to_string()),
        other => ApiError::Transport(other.to_string()),
    }
}

/// Check the HTTP response status and capture status and body if non-2xx.
async fn check_response(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Http { status, body })
}

impl RunApi for HttpRunApi {
    fn start(&self, request: &StartRequest) -> impl Future<Output = Result<(), ApiError>> {
        let request = Request::post(&self.endpoints.start).json(request);
        async move {
            let resp = request.map_err(api_error)?.send().await.map_err(api_error)?;
            check_response(resp).await?;
            Ok(())
        }
    }

    fn stop(&self) -> impl Future<Output = Result<(), ApiError>> {
        let request = Request::post(&self.endpoints.stop).header("Content-Type", "application/json");
        async move {
            let resp = request.send().await.map_err(api_error)?;
            check_response(resp).await?;
            Ok(())
        }
    }

    fn status(&self) -> impl Future<Output = Result<StatusResponse, ApiError>> {
        let request = Request::get(&self.endpoints.status);
        async move {
            let resp = check_response(request.send().await.map_err(api_error)?).await?;
            resp.json::<StatusResponse>().await.map_err(api_error)
        }
    }
}
