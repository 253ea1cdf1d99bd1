//! Submission retrieval: post titles for a subreddit over an epoch window.

mod api;
mod wire;

use chrono::{NaiveDate, NaiveTime};

use crate::core::{PulseClient, PulseError, client::RetryConfig, models::PostRecord};

/// Epoch-second window `[midnight UTC, next midnight UTC)` for one calendar day.
#[must_use]
pub fn day_window_utc(day: NaiveDate) -> (i64, i64) {
    let start = day.and_time(NaiveTime::MIN).and_utc().timestamp();
    (start, start + 86_400)
}

/// A builder for fetching the posts of a subreddit within an epoch window.
pub struct SubmissionsBuilder {
    client: PulseClient,
    subreddit: String,
    after: i64,
    before: i64,
    size: Option<u32>,
    retry_override: Option<RetryConfig>,
}

impl SubmissionsBuilder {
    /// Creates a new `SubmissionsBuilder` for posts in `[after, before)` epoch seconds.
    pub fn new(
        client: &PulseClient,
        subreddit: impl Into<String>,
        after: i64,
        before: i64,
    ) -> Self {
        Self {
            client: client.clone(),
            subreddit: subreddit.into(),
            after,
            before,
            size: None,
            retry_override: None,
        }
    }

    /// Creates a builder covering one whole UTC calendar day.
    pub fn for_day(client: &PulseClient, subreddit: impl Into<String>, day: NaiveDate) -> Self {
        let (after, before) = day_window_utc(day);
        Self::new(client, subreddit, after, before)
    }

    /// Caps the number of returned posts.
    #[must_use]
    pub const fn size(mut self, n: u32) -> Self {
        self.size = Some(n);
        self
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Executes the request and fetches the post records.
    ///
    /// Rows missing a title are skipped. Callers wanting degradation treat an
    /// `Err` as an empty day (the [`crate::PulseBuilder`] facade does).
    ///
    /// # Errors
    ///
    /// Returns `PulseError` if the request fails, the server answers with a
    /// non-success status, or the body cannot be parsed.
    pub async fn fetch(self) -> Result<Vec<PostRecord>, PulseError> {
        api::fetch_submissions(
            &self.client,
            &self.subreddit,
            self.after,
            self.before,
            self.size,
            self.retry_override.as_ref(),
        )
        .await
    }
}
