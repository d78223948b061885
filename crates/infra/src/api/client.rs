//! JSON client for the Numerolog backend
//!
//! Resolves paths against the configured origin and turns non-2xx answers
//! into the message the backend put in `detail` or `message`.

use std::time::Duration;

use numerolog_domain::constants::messages;
use numerolog_domain::{ApiConfig, NumerologyError, Result};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::errors::into_domain;
use crate::http::{HttpClient, RetryPolicy};

/// Backend client returning raw JSON values
#[derive(Clone)]
pub struct ApiClient {
    http_client: HttpClient,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `config.base_url`.
    ///
    /// # Errors
    ///
    /// Returns `NumerologyError::Config` if the origin is not an absolute
    /// http(s) URL or the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url).map_err(|e| {
            NumerologyError::Config(format!("Invalid API base URL '{}': {}", config.base_url, e))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(NumerologyError::Config(format!(
                "API base URL must use http or https: {}",
                config.base_url
            )));
        }

        let timeout = Duration::from_secs(config.timeout_secs);
        let http_client = HttpClient::new(timeout, RetryPolicy::new(config.max_attempts))
            .map_err(|e| NumerologyError::Config(format!("Failed to build HttpClient: {}", e)))?;

        Ok(Self { http_client, base_url })
    }

    /// Origin every path is resolved against, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Execute a GET request
    ///
    /// # Errors
    ///
    /// Network failures, or `NumerologyError::Api` carrying the backend's
    /// message for a non-2xx response.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get_json(&self, path: &str) -> Result<Value> {
        let url = self.url_for(path);
        debug!(url = %url, "GET request");

        let request = self.http_client.request(Method::GET, &url);
        let value = self.execute(request).await?;

        info!(path = %path, "GET request successful");
        Ok(value)
    }

    /// Execute a request with a JSON body
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::get_json`].
    #[instrument(skip(self, body), fields(method = %method, path = %path))]
    pub async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Value> {
        let url = self.url_for(path);
        debug!(url = %url, "JSON request");

        let request = self.http_client.request(method.clone(), &url).json(body);
        let value = self.execute(request).await?;

        info!(%method, path = %path, "JSON request successful");
        Ok(value)
    }

    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<Value> {
        let response = self.http_client.send(request).await.inspect_err(|err| {
            warn!(error = %err, "Backend unreachable");
        })?;

        let status = response.status();
        let body = response.text().await.map_err(into_domain)?;

        if !status.is_success() {
            let message = error_message(&body);
            warn!(%status, message = %message, "Backend returned an error");
            return Err(NumerologyError::Api(message));
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(into_domain)
    }
}

/// Message for a failed response: `detail`, then `message`, then the
/// generic fallback.
pub(crate) fn error_message(body: &str) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let field = |name: &str| {
        parsed
            .as_ref()
            .and_then(|value| value.get(name))
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    };

    field("detail")
        .or_else(|| field("message"))
        .unwrap_or_else(|| messages::REQUEST_FAILED.to_string())
}
