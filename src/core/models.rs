use chrono::NaiveDate;
use serde::Serialize;

/// A single subreddit post, as returned by the submission API.
///
/// Consumed once by the mention extractor; nothing downstream keeps it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostRecord {
    /// The post title. Mention extraction only looks at this field.
    pub title: String,
    /// The posting account name.
    pub author: String,
    /// The post's outbound or permalink URL.
    pub url: String,
}

/// One row of a ticker's news table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadlineRow {
    /// The ticker symbol this headline was collected for.
    pub ticker: String,
    /// The publication date. `None` when the source row carried only a time
    /// and no earlier row in the same table had an explicit date; such rows
    /// are excluded from aggregation.
    pub date: Option<NaiveDate>,
    /// The publication time, as printed by the source (e.g. `09:00AM`).
    pub time: String,
    /// The headline text.
    pub title: String,
}
