use std::collections::HashMap;

use wsb_pulse::{TickerMentionMap, rank};

fn map_of(entries: &[(&str, u32)]) -> TickerMentionMap {
    entries
        .iter()
        .map(|(s, n)| ((*s).to_string(), *n))
        .collect::<HashMap<_, _>>()
}

#[test]
fn orders_by_count_descending() {
    let map = map_of(&[("GME", 5), ("AMC", 3), ("BB", 7)]);
    assert_eq!(rank(&map, 3), vec!["BB", "GME", "AMC"]);
}

#[test]
fn breaks_ties_by_symbol_ascending() {
    let map = map_of(&[("TSLA", 2), ("AAPL", 2), ("GME", 5), ("BB", 2)]);
    assert_eq!(rank(&map, 4), vec!["GME", "AAPL", "BB", "TSLA"]);
}

#[test]
fn truncates_to_k() {
    let map = map_of(&[("GME", 5), ("AMC", 3), ("BB", 2), ("TSLA", 1)]);
    assert_eq!(rank(&map, 3).len(), 3);
    assert_eq!(rank(&map, 1), vec!["GME"]);
}

#[test]
fn returns_all_when_fewer_than_k() {
    let map = map_of(&[("GME", 5), ("AMC", 3)]);
    assert_eq!(rank(&map, 3), vec!["GME", "AMC"]);
}

#[test]
fn zero_k_and_empty_map_yield_empty_lists() {
    let map = map_of(&[("GME", 5)]);
    assert!(rank(&map, 0).is_empty());
    assert!(rank(&TickerMentionMap::new(), 3).is_empty());
}
