//! Public client surface + builder.
//! Internals are split into `retry` (policy) and `constants` (UA + defaults).

mod constants;
mod retry;

pub use retry::{Backoff, RetryConfig};

use crate::core::error::PulseError;
use constants::{DEFAULT_BASE_NEWS, DEFAULT_BASE_SUBMISSIONS, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Shared HTTP client plus endpoint configuration for all pipeline stages.
///
/// Cheap to clone (the inner `reqwest::Client` is reference-counted); build
/// one per run and hand it to every builder. Base URLs are overridable so
/// tests can point the client at a mock server.
#[derive(Debug, Clone)]
pub struct PulseClient {
    http: Client,
    base_submissions: Url,
    base_news: Url,
    retry: RetryConfig,
}

impl Default for PulseClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl PulseClient {
    /// Create a new builder.
    pub fn builder() -> PulseClientBuilder {
        PulseClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_submissions(&self) -> &Url {
        &self.base_submissions
    }
    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }

    /// Send a request, retrying transient failures per the retry policy.
    ///
    /// `retry_override` replaces the client-wide policy for this call only.
    pub(crate) async fn send_with_retry(
        &self,
        req: reqwest::RequestBuilder,
        retry_override: Option<&RetryConfig>,
    ) -> Result<reqwest::Response, PulseError> {
        let cfg = retry_override.unwrap_or(&self.retry);
        if !cfg.enabled {
            return Ok(req.send().await?);
        }

        let mut attempt: u32 = 0;
        loop {
            let this_try = req
                .try_clone()
                .ok_or_else(|| PulseError::Data("request body not cloneable for retry".into()))?;

            match this_try.send().await {
                Ok(resp) => {
                    let status = resp.status().as_u16();
                    if !cfg.retry_on_status.contains(&status) || attempt >= cfg.max_retries {
                        return Ok(resp);
                    }
                    tracing::debug!(status, attempt, "retrying on status");
                }
                Err(e) => {
                    let transient = (e.is_timeout() && cfg.retry_on_timeout)
                        || (e.is_connect() && cfg.retry_on_connect);
                    if !transient || attempt >= cfg.max_retries {
                        return Err(e.into());
                    }
                    tracing::debug!(error = %e, attempt, "retrying on transport error");
                }
            }

            tokio::time::sleep(cfg.backoff.delay(attempt)).await;
            attempt += 1;
        }
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct PulseClientBuilder {
    user_agent: Option<String>,
    base_submissions: Option<Url>,
    base_news: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    retry: Option<RetryConfig>,
}

impl PulseClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the submission API base (e.g. `https://api.pushshift.io/`).
    pub fn base_submissions(mut self, url: Url) -> Self {
        self.base_submissions = Some(url);
        self
    }

    /// Override the news quote-page base (e.g. `https://finviz.com/`).
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: 30s.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Set the client-wide retry policy. Default: [`RetryConfig::default`].
    pub fn retry_policy(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns `PulseError` if a default URL fails to parse or the underlying
    /// HTTP client cannot be constructed.
    pub fn build(self) -> Result<PulseClient, PulseError> {
        let base_submissions = self
            .base_submissions
            .map_or_else(|| Url::parse(DEFAULT_BASE_SUBMISSIONS), Ok)?;
        let base_news = self.base_news.map_or_else(|| Url::parse(DEFAULT_BASE_NEWS), Ok)?;

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(self.timeout.unwrap_or(Duration::from_secs(30)));

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(PulseClient {
            http,
            base_submissions,
            base_news,
            retry: self.retry.unwrap_or_default(),
        })
    }
}
