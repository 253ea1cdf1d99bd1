//! Headline collection: the news table of each ranked ticker.

mod api;
mod parse;

use std::collections::HashMap;

use futures::future::join_all;

use crate::core::{PulseClient, PulseError, client::RetryConfig, models::HeadlineRow};

/// A builder for fetching the news headlines of one ticker.
pub struct HeadlinesBuilder {
    client: PulseClient,
    ticker: String,
    retry_override: Option<RetryConfig>,
}

impl HeadlinesBuilder {
    /// Creates a new `HeadlinesBuilder` for a given ticker symbol.
    pub fn new(client: &PulseClient, ticker: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            ticker: ticker.into(),
            retry_override: None,
        }
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Fetches the ticker's news table and parses it into rows, with the
    /// "today" rows inheriting the nearest preceding explicit date.
    ///
    /// # Errors
    ///
    /// Returns `PulseError` if the request fails, the server answers with a
    /// non-success status, or the page has no news table.
    pub async fn fetch(self) -> Result<Vec<HeadlineRow>, PulseError> {
        api::fetch_headlines(&self.client, &self.ticker, self.retry_override.as_ref()).await
    }
}

/// Collect headlines for several tickers concurrently.
///
/// Each ticker is fetched independently; a failure is logged and that ticker
/// is omitted from the result, without cancelling its siblings. Partial
/// success is the normal degraded mode.
pub async fn fetch_all(
    client: &PulseClient,
    tickers: &[String],
    retry_override: Option<&RetryConfig>,
) -> HashMap<String, Vec<HeadlineRow>> {
    let fetches = tickers.iter().map(|ticker| {
        let builder = HeadlinesBuilder::new(client, ticker)
            .retry_policy(retry_override.cloned());
        async move { (ticker.clone(), builder.fetch().await) }
    });

    let mut out = HashMap::new();
    for (ticker, result) in join_all(fetches).await {
        match result {
            Ok(rows) => {
                out.insert(ticker, rows);
            }
            Err(e) => {
                tracing::warn!(ticker = %ticker, error = %e, "headline fetch failed; ticker omitted");
            }
        }
    }
    out
}
