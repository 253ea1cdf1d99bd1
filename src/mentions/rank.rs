use super::TickerMentionMap;

/// Order tickers by mention count and take the top `k`.
///
/// Comparator: count descending, then symbol ascending, so equal counts come
/// out in a reproducible order. Fewer than `k` distinct tickers returns all
/// of them; an empty map returns an empty list.
#[must_use]
pub fn rank(map: &TickerMentionMap, k: usize) -> Vec<String> {
    let mut entries: Vec<(&String, &u32)> = map.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    entries.into_iter().take(k).map(|(sym, _)| sym.clone()).collect()
}
