//! Sentiment scoring and per-(ticker, date) aggregation.

mod aggregate;

pub use aggregate::{SentimentMatrix, SentimentMeans, aggregate};

/// A compound-polarity scoring capability for short texts.
///
/// Implementations return a score in `[-1, 1]`. The scorer is injected by the
/// caller (no shared module-level analyzer); [`FnScorer`] adapts a plain
/// closure, which keeps tests free of a real model.
pub trait SentimentScorer {
    /// Compound polarity of `text`, in `[-1, 1]`.
    fn compound(&self, text: &str) -> f64;
}

/// Adapts any `Fn(&str) -> f64` closure to a [`SentimentScorer`].
pub struct FnScorer<F>(pub F);

impl<F> SentimentScorer for FnScorer<F>
where
    F: Fn(&str) -> f64,
{
    fn compound(&self, text: &str) -> f64 {
        (self.0)(text)
    }
}

/// VADER-backed scorer, the default scoring capability for headlines.
pub struct VaderScorer {
    analyzer: vader_sentiment::SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    /// Creates a scorer with the stock VADER lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self {
            analyzer: vader_sentiment::SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for VaderScorer {
    fn compound(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }
        self.analyzer
            .polarity_scores(text)
            .get("compound")
            .copied()
            .unwrap_or(0.0)
    }
}
