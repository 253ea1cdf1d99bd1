//! wsb-pulse: daily cashtag mention ranking + news sentiment for a subreddit.
//!
//! The pipeline runs in four stages over one calendar day:
//! 1. fetch post titles for the day ([`SubmissionsBuilder`]),
//! 2. extract and count cashtag mentions ([`mentions::extract`]),
//! 3. rank tickers by mention count and collect news headlines for the top K
//!    ([`mentions::rank`], [`headlines`]),
//! 4. aggregate mean compound sentiment per (ticker, date) ([`sentiment`]).
//!
//! [`PulseBuilder`] wires the stages together; each stage is also usable on
//! its own. Fetch failures degrade (empty day, omitted ticker) rather than
//! abort the run.

pub mod core;
pub mod headlines;
pub mod mentions;
pub mod pulse;
pub mod sentiment;
pub mod submissions;

pub use crate::core::client::{Backoff, RetryConfig};
pub use crate::core::{HeadlineRow, PostRecord, PulseClient, PulseClientBuilder, PulseError};
pub use headlines::HeadlinesBuilder;
pub use mentions::{DEFAULT_TOP_K, TickerMentionMap, extract, rank};
pub use pulse::{PulseBuilder, PulseReport};
pub use sentiment::{
    FnScorer, SentimentMatrix, SentimentMeans, SentimentScorer, VaderScorer, aggregate,
};
pub use submissions::{SubmissionsBuilder, day_window_utc};
