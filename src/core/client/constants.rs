//! Centralized constants for default endpoints and UA.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Pushshift-compatible submission API base (`reddit/search/submission/` is appended).
pub(crate) const DEFAULT_BASE_SUBMISSIONS: &str = "https://api.pushshift.io/";

/// Finviz quote-page base; the news table lives at `quote.ashx?t=<TICKER>`.
pub(crate) const DEFAULT_BASE_NEWS: &str = "https://finviz.com/";
