use {
    super::error::ApruveError,
    reqwest::{Method, StatusCode, header::HeaderMap},
    std::{future::Future, pin::Pin},
};

/// A request against the versioned API root. `path` is relative to
/// `/api/v3/`, e.g. `payment_requests/42/payments`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            body: Some(body.into()),
        }
    }

    pub fn put(path: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: Method::PUT,
            path: path.into(),
            body: Some(body.into()),
        }
    }
}

/// Raw server answer. Status mapping happens in the resource layer, so the
/// transport returns non-2xx responses as `Ok`.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }
}

/// Authenticated request/response exchange with the API.
pub trait HttpTransport: Send + Sync {
    fn send(
        &self,
        request: ApiRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ApiResponse, ApruveError>> + Send + '_>>;
}
