use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::core::models::HeadlineRow;
use crate::sentiment::SentimentScorer;

/// Mean compound score keyed by (ticker, date). Deterministically ordered.
pub type SentimentMeans = BTreeMap<(String, NaiveDate), f64>;

/// Score each headline and reduce to the mean compound score per (ticker, date).
///
/// Rows are scored independently (order never matters). Rows without a
/// resolved date cannot be grouped and are dropped here; an empty or
/// whitespace-only title scores 0.0 without consulting the scorer.
pub fn aggregate(rows: &[HeadlineRow], scorer: &dyn SentimentScorer) -> SentimentMeans {
    let mut sums: BTreeMap<(String, NaiveDate), (f64, u32)> = BTreeMap::new();

    for row in rows {
        let Some(date) = row.date else {
            tracing::debug!(ticker = %row.ticker, "dropping dateless headline row");
            continue;
        };
        let score = if row.title.trim().is_empty() {
            0.0
        } else {
            scorer.compound(&row.title)
        };
        let entry = sums.entry((row.ticker.clone(), date)).or_insert((0.0, 0));
        entry.0 += score;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(key, (sum, n))| (key, sum / f64::from(n)))
        .collect()
}

/// Ticker-by-date pivot of mean compound scores, shaped for charting:
/// rows are dates, columns are tickers, a missing combination stays absent
/// rather than zero-filled.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentMatrix {
    tickers: Vec<String>,
    dates: Vec<NaiveDate>,
    cells: SentimentMeans,
}

impl SentimentMatrix {
    /// Pivot grouped means into a matrix.
    #[must_use]
    pub fn from_means(means: SentimentMeans) -> Self {
        let mut tickers: Vec<String> = means.keys().map(|(t, _)| t.clone()).collect();
        tickers.sort();
        tickers.dedup();

        let mut dates: Vec<NaiveDate> = means.keys().map(|&(_, d)| d).collect();
        dates.sort_unstable();
        dates.dedup();

        Self {
            tickers,
            dates,
            cells: means,
        }
    }

    /// Column labels, sorted ascending.
    #[must_use]
    pub fn tickers(&self) -> &[String] {
        &self.tickers
    }

    /// Row labels, sorted ascending.
    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Mean compound score for one (ticker, date), if any headline landed there.
    #[must_use]
    pub fn cell(&self, ticker: &str, date: NaiveDate) -> Option<f64> {
        self.cells.get(&(ticker.to_string(), date)).copied()
    }

    /// One matrix row: the cells for `date`, aligned with [`Self::tickers`].
    #[must_use]
    pub fn row(&self, date: NaiveDate) -> Vec<Option<f64>> {
        self.tickers.iter().map(|t| self.cell(t, date)).collect()
    }

    /// True when no (ticker, date) group exists at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
