use std::collections::{HashMap, HashSet};

use crate::core::models::PostRecord;

/// Mention count per bare ticker symbol (no `$` marker). Unordered.
pub type TickerMentionMap = HashMap<String, u32>;

/// Characters that mark a denomination right after the `$` (rejects `$$`,
/// `$5M` whose stripped form is `$M`, and the like).
const DENOMINATION_SUFFIXES: [char; 5] = ['$', 'M', 'K', 'B', 'T'];

/// Count cashtag mentions across a batch of post titles.
///
/// A symbol mentioned several times in one title counts once for that post.
/// Malformed tokens are filtered, never an error; an empty batch yields an
/// empty map.
#[must_use]
pub fn extract(posts: &[PostRecord]) -> TickerMentionMap {
    let mut counts = TickerMentionMap::new();
    for post in posts {
        let title = post.title.to_uppercase();
        let mut seen: HashSet<String> = HashSet::new();
        for raw in title.split_whitespace() {
            if let Some(symbol) = candidate_symbol(raw) {
                seen.insert(symbol);
            }
        }
        for symbol in seen {
            *counts.entry(symbol).or_insert(0) += 1;
        }
    }
    counts
}

/// Apply the cashtag heuristics to one uppercased whitespace token, yielding
/// the bare symbol if it survives them all.
fn candidate_symbol(raw: &str) -> Option<String> {
    // Keep letters, `$` and `^` only; punctuation goes, a leading cashtag
    // marker stays.
    let stripped: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == '$' || *c == '^')
        .collect();

    let mut chars = stripped.chars();
    let first = chars.next()?; // empty after stripping
    if first != '$' {
        return None;
    }
    // Length-guarded: a bare `$` has no second char and falls through to the
    // empty-symbol rejection below instead of indexing out of range.
    if let Some(second) = chars.next()
        && DENOMINATION_SUFFIXES.contains(&second)
    {
        return None;
    }
    // Option-chain-like tokens ($AAPL210917C150) only show their digits in the
    // raw form; the stripped form never carries any.
    if raw.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    let symbol = &stripped['$'.len_utf8()..];
    if symbol.is_empty() {
        return None;
    }
    Some(symbol.to_string())
}
