//! Scrape the quote-page HTML and extract the news table.
//!
//! Same approach as the rest of the crate's scraping: plain string scanning,
//! no HTML parser. The table is well-formed enough that `<tr>`/`<td>`/`<a>`
//! boundaries are reliable anchors.

use chrono::NaiveDate;

use crate::core::{PulseError, models::HeadlineRow};

/// Source format of an explicit date cell, e.g. `Sep-17-21`.
const DATE_FORMAT: &str = "%b-%d-%y";

/// Parse the `news-table` rows for one ticker, forward-filling dates.
///
/// A timestamp cell with a single field means "today": the row inherits the
/// nearest preceding explicit date in table order. Rows before any explicit
/// date keep `date: None` and are left for the aggregator to drop. Rows that
/// cannot be parsed at all are skipped; only a missing table is an error.
pub(super) fn parse_news_table(ticker: &str, html: &str) -> Result<Vec<HeadlineRow>, PulseError> {
    let table = news_table_inner(html)
        .ok_or_else(|| PulseError::Data(format!("news table missing for {ticker}")))?;

    let mut rows = Vec::new();
    let mut last_date: Option<NaiveDate> = None;
    let mut pos = 0usize;

    while let Some(fragment) = next_row(table, &mut pos) {
        let Some(stamp) = first_tag_text(fragment, "td") else {
            continue;
        };
        let Some(title) = first_tag_text(fragment, "a") else {
            continue;
        };
        let Some((explicit, time)) = split_stamp(&stamp) else {
            tracing::debug!(ticker, stamp = %stamp, "skipping news row with unparseable timestamp");
            continue;
        };

        if explicit.is_some() {
            last_date = explicit;
        }
        rows.push(HeadlineRow {
            ticker: ticker.to_string(),
            date: explicit.or(last_date),
            time,
            title,
        });
    }

    Ok(rows)
}

/// Split a timestamp cell into (explicit date, time).
///
/// One field is a bare time ("today"); two fields are date + time. A date
/// field that fails to parse invalidates the row.
fn split_stamp(stamp: &str) -> Option<(Option<NaiveDate>, String)> {
    let mut fields = stamp.split_whitespace();
    let first = fields.next()?;
    match fields.next() {
        None => Some((None, first.to_string())),
        Some(time) => {
            let date = NaiveDate::parse_from_str(first, DATE_FORMAT).ok()?;
            Some((Some(date), time.to_string()))
        }
    }
}

/// Inner HTML of the element carrying `id="news-table"`.
fn news_table_inner(html: &str) -> Option<&str> {
    let anchor = html.find("id=\"news-table\"")?;
    let open_end = anchor + html[anchor..].find('>')?;
    let close = open_end + html[open_end..].find("</table>")?;
    Some(&html[open_end + 1..close])
}

/// Next `<tr>...</tr>` fragment at or after `*pos`, advancing the cursor.
fn next_row<'a>(table: &'a str, pos: &mut usize) -> Option<&'a str> {
    let start = *pos + table[*pos..].find("<tr")?;
    let open_end = start + table[start..].find('>')?;
    let close = open_end + table[open_end..].find("</tr>")?;
    *pos = close + "</tr>".len();
    Some(&table[open_end + 1..close])
}

/// Text content of the first `<tag ...>...</tag>` element in `fragment`.
fn first_tag_text(fragment: &str, tag: &str) -> Option<String> {
    let open_pat = format!("<{tag}");
    let close_pat = format!("</{tag}>");
    let start = fragment.find(&open_pat)?;
    let open_end = start + fragment[start..].find('>')?;
    let close = open_end + fragment[open_end..].find(&close_pat)?;
    let text = strip_tags(&fragment[open_end + 1..close]);
    (!text.is_empty()).then_some(text)
}

/// Drop nested markup and decode the entities the news table actually uses.
fn strip_tags(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len());
    let mut in_tag = false;
    for c in inner.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&#39;", "'")
        .trim()
        .to_string()
}
