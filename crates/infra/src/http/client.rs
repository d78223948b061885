//! Shared reqwest wrapper
//!
//! Every call gets the configured timeout. Idempotent methods may be retried
//! on a 5xx answer or a connect/timeout failure; `POST` and `PATCH` go out
//! exactly once, so a registration or an AI report is never submitted twice.

use std::time::Duration;

use numerolog_domain::Result;
use reqwest::{Client as ReqwestClient, Method, Request, RequestBuilder, Response};
use tracing::{debug, warn};

use crate::errors::into_domain;

const USER_AGENT: &str = concat!("numerolog-client/", env!("CARGO_PKG_VERSION"));

/// Longest pause between two retries.
const MAX_BACKOFF: Duration = Duration::from_secs(5);

/// How many times a request may be sent and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts for idempotent methods, the first one included.
    pub max_attempts: usize,
    /// Pause before the first retry; doubled for each further one.
    pub base_backoff: Duration,
}

impl RetryPolicy {
    pub const ONCE: Self = Self { max_attempts: 1, base_backoff: Duration::ZERO };

    pub fn new(max_attempts: usize) -> Self {
        Self { max_attempts: max_attempts.max(1), base_backoff: Duration::from_millis(200) }
    }

    pub fn with_backoff(self, base_backoff: Duration) -> Self {
        Self { base_backoff, ..self }
    }

    /// Attempts allowed for `method`.
    pub fn attempts_for(&self, method: &Method) -> usize {
        if method.is_idempotent() {
            self.max_attempts.max(1)
        } else {
            1
        }
    }

    /// Pause before retry number `retry` (1-based).
    pub fn delay_before(&self, retry: usize) -> Duration {
        let doublings = retry.saturating_sub(1).min(16) as u32;
        self.base_backoff.saturating_mul(1u32 << doublings).min(MAX_BACKOFF)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::ONCE
    }
}

/// Transport used by [`ApiClient`](crate::api::ApiClient).
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    retry: RetryPolicy,
}

impl HttpClient {
    /// # Errors
    ///
    /// `NumerologyError::Internal` when the TLS backend cannot be set up.
    pub fn new(timeout: Duration, retry: RetryPolicy) -> Result<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .no_proxy()
            .build()
            .map_err(into_domain)?;
        Ok(Self { client, retry })
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    pub fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client.request(method, url)
    }

    /// Send the request, retrying it while the policy allows.
    ///
    /// Any response that comes back on the last attempt is returned as-is,
    /// error statuses included; the caller decides what they mean.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let request = builder.build().map_err(into_domain)?;
        let attempts = self.retry.attempts_for(request.method());
        let mut retry = 0;

        loop {
            let more_left = retry + 1 < attempts;
            let Some(attempt) = request.try_clone().filter(|_| more_left) else {
                return self.send_once(request).await;
            };

            match self.client.execute(attempt).await {
                Ok(response) if !response.status().is_server_error() => return Ok(response),
                Ok(response) => {
                    warn!(url = %request.url(), status = %response.status(), retry, "Retrying");
                }
                Err(err) if is_transient(&err) => {
                    warn!(url = %request.url(), error = %err, retry, "Retrying");
                }
                Err(err) => return Err(into_domain(err)),
            }

            retry += 1;
            tokio::time::sleep(self.retry.delay_before(retry)).await;
        }
    }

    async fn send_once(&self, request: Request) -> Result<Response> {
        let method = request.method().clone();
        let url = request.url().clone();
        let response = self.client.execute(request).await.map_err(into_domain)?;
        debug!(%method, %url, status = %response.status(), "HTTP response");
        Ok(response)
    }
}

fn is_transient(err: &reqwest::Error) -> bool {
    err.is_connect() || err.is_timeout()
}
