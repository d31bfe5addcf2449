//! HTTP backend abstraction for RoboHash downloads.
//!
//! The client only needs "GET these bytes", so the backend is a single-method
//! trait. The production implementation uses reqwest with automatic retry
//! for transient errors; tests swap in a canned-response fake or a mock.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::config::RoboHashClientConfig;
use crate::error::{RoboHashError, RoboHashResult};

/// A successful response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpBody {
    /// Raw body bytes
    pub bytes: Vec<u8>,
    /// The `Content-Type` header, when present
    pub content_type: Option<String>,
}

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can download a URL.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Download `url`, failing on any non-success status.
    async fn get_bytes(&self, url: &Url) -> RoboHashResult<HttpBody>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest with retry logic.
///
/// Implements exponential backoff for transient server errors (5xx),
/// rate limiting (429) and network errors.
pub struct ReqwestBackend {
    client: reqwest::Client,
    max_retries: u8,
    retry_base_delay: Duration,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &RoboHashClientConfig) -> RoboHashResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            max_retries: config.max_retries,
            retry_base_delay: config.retry_base_delay,
        })
    }

    /// Fetch a URL with automatic retry for transient errors.
    async fn fetch_with_retry(&self, url: &Url) -> RoboHashResult<reqwest::Response> {
        let mut last_error: Option<RoboHashError> = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = backoff_delay(self.retry_base_delay, attempt);
                tracing::debug!(%url, attempt, ?delay, "Retrying RoboHash request");
                tokio::time::sleep(delay).await;
            }

            match self.client.get(url.as_str()).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }

                    let error = RoboHashError::RequestFailed {
                        status: status.as_u16(),
                        url: url.to_string(),
                    };

                    // 5xx and 429 are retryable
                    if error.is_transient() && attempt < self.max_retries {
                        tracing::debug!(%url, status = status.as_u16(), "Transient server error");
                        last_error = Some(error);
                        continue;
                    }

                    // 4xx errors or final attempt - fail immediately
                    return Err(error);
                }
                Err(e) => {
                    // Network errors are retryable
                    if attempt < self.max_retries {
                        tracing::debug!(%url, error = %e, "Network error");
                        last_error = Some(e.into());
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }

        Err(last_error.unwrap_or_else(|| RoboHashError::RequestFailed {
            status: 0,
            url: url.to_string(),
        }))
    }
}

/// Delay before retry number `attempt` (1-based): `base * 2^(attempt - 1)`.
fn backoff_delay(base: Duration, attempt: u8) -> Duration {
    let exponent = u32::from(attempt.saturating_sub(1));
    base.saturating_mul(2u32.saturating_pow(exponent))
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_bytes(&self, url: &Url) -> RoboHashResult<HttpBody> {
        let response = self.fetch_with_retry(url).await?;
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await?.to_vec();
        Ok(HttpBody {
            bytes,
            content_type,
        })
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
