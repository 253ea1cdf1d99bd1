//! Cashtag mention extraction and ranking over post titles.
//!
//! Pure, no I/O. [`extract`] turns a batch of posts into per-ticker mention
//! counts; [`rank`] orders them and takes the top K.

mod extract;
mod rank;

pub use extract::{TickerMentionMap, extract};
pub use rank::rank;

/// Default number of tickers carried into headline collection.
pub const DEFAULT_TOP_K: usize = 3;
