//! End-to-end daily run: extract, rank, collect, aggregate.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::{
    core::{PulseClient, PulseError, client::RetryConfig, models::HeadlineRow},
    headlines, mentions,
    mentions::TickerMentionMap,
    sentiment::{self, SentimentMatrix, SentimentMeans, SentimentScorer},
    submissions::SubmissionsBuilder,
};

/// Everything one daily run produces, intermediate stages included, so a
/// rendering collaborator can chart or inspect without re-running anything.
#[derive(Debug, Clone)]
pub struct PulseReport {
    /// The analyzed calendar day (UTC).
    pub day: NaiveDate,
    /// Mention count per extracted ticker.
    pub mentions: TickerMentionMap,
    /// Top tickers, count descending (symbol ascending on ties).
    pub ranked: Vec<String>,
    /// Collected headline rows per ranked ticker; failed tickers are absent.
    pub headlines: HashMap<String, Vec<HeadlineRow>>,
    /// Mean compound sentiment pivoted by date and ticker.
    pub sentiment: SentimentMatrix,
}

/// A builder for one daily mention-and-sentiment run over a subreddit.
///
/// Stage handoffs are immutable values; no state is shared across stages.
/// Retrieval failures degrade per stage (empty day, omitted ticker) instead
/// of failing the run, and a day with zero extracted tickers short-circuits
/// before any headline fetch.
pub struct PulseBuilder {
    client: PulseClient,
    subreddit: String,
    day: NaiveDate,
    top_k: usize,
    submission_limit: Option<u32>,
    retry_override: Option<RetryConfig>,
}

impl PulseBuilder {
    /// Creates a new run over `subreddit` for one UTC calendar day.
    pub fn new(client: &PulseClient, subreddit: impl Into<String>, day: NaiveDate) -> Self {
        Self {
            client: client.clone(),
            subreddit: subreddit.into(),
            day,
            top_k: mentions::DEFAULT_TOP_K,
            submission_limit: None,
            retry_override: None,
        }
    }

    /// How many top tickers to carry into headline collection. Default: 3.
    #[must_use]
    pub const fn top_k(mut self, k: usize) -> Self {
        self.top_k = k;
        self
    }

    /// Caps the number of posts fetched for the day.
    #[must_use]
    pub const fn submission_limit(mut self, n: u32) -> Self {
        self.submission_limit = Some(n);
        self
    }

    /// Overrides the client's retry policy for every call in this run.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Runs the pipeline with the given scoring capability.
    ///
    /// # Errors
    ///
    /// Currently infallible in practice (every retrieval failure degrades);
    /// the `Result` is kept so callers already handle future fatal modes.
    pub async fn run(self, scorer: &dyn SentimentScorer) -> Result<PulseReport, PulseError> {
        let mut sb = SubmissionsBuilder::for_day(&self.client, &self.subreddit, self.day)
            .retry_policy(self.retry_override.clone());
        if let Some(n) = self.submission_limit {
            sb = sb.size(n);
        }

        let posts = match sb.fetch().await {
            Ok(posts) => posts,
            Err(e) => {
                tracing::warn!(
                    subreddit = %self.subreddit,
                    error = %e,
                    "submission fetch failed; treating the day as empty"
                );
                Vec::new()
            }
        };

        let mention_map = mentions::extract(&posts);
        let ranked = mentions::rank(&mention_map, self.top_k);

        if ranked.is_empty() {
            tracing::debug!(subreddit = %self.subreddit, day = %self.day, "no tickers extracted");
            return Ok(PulseReport {
                day: self.day,
                mentions: mention_map,
                ranked,
                headlines: HashMap::new(),
                sentiment: SentimentMatrix::from_means(SentimentMeans::new()),
            });
        }

        let collected =
            headlines::fetch_all(&self.client, &ranked, self.retry_override.as_ref()).await;

        let rows: Vec<HeadlineRow> = collected.values().flatten().cloned().collect();
        let means = sentiment::aggregate(&rows, scorer);

        Ok(PulseReport {
            day: self.day,
            mentions: mention_map,
            ranked,
            headlines: collected,
            sentiment: SentimentMatrix::from_means(means),
        })
    }
}
