use {
    crate::{
        config::Config,
        domain::{
            error::ApruveError,
            transport::{ApiRequest, ApiResponse, HttpTransport},
        },
    },
    reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue},
    std::{future::Future, pin::Pin},
};

const API_KEY_HEADER: &str = "apruve-api-key";

/// Production transport: reqwest client with the api key and JSON headers
/// preset on every request.
pub struct ReqwestTransport {
    client: reqwest::Client,
    config: Config,
}

impl ReqwestTransport {
    pub fn new(config: Config) -> Result<Self, ApruveError> {
        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(config.api_key())
            .map_err(|e| ApruveError::Config(format!("invalid api key header value: {e}")))?;
        key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(
        &self,
        request: ApiRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ApiResponse, ApruveError>> + Send + '_>> {
        Box::pin(async move { self.send_inner(request).await })
    }
}

impl ReqwestTransport {
    async fn send_inner(&self, request: ApiRequest) -> Result<ApiResponse, ApruveError> {
        let url = self.config.endpoint(&request.path)?;
        tracing::debug!(method = %request.method, %url, "sending api request");

        let mut builder = self.client.request(request.method, url);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;
        tracing::debug!(%status, bytes = body.len(), "api response received");

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}
