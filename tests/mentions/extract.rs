use crate::common::post;
use wsb_pulse::{extract, rank};

#[test]
fn counts_cashtags_once_per_post() {
    let posts = vec![
        post("$GME to the moon"),
        post("$gme mooning, $GME everywhere"),
        post("holding $AMC and $GME"),
    ];
    let map = extract(&posts);
    assert_eq!(map.get("GME").copied(), Some(3));
    assert_eq!(map.get("AMC").copied(), Some(1));
    assert_eq!(map.len(), 2);
}

#[test]
fn rejects_digit_bearing_candidates() {
    let posts = vec![post("$AAPL5 options"), post("$AAPL210917C150 printing")];
    assert!(extract(&posts).is_empty());
}

#[test]
fn rejects_denomination_tokens() {
    let posts = vec![
        post("$5M yolo"),
        post("$10B market cap"),
        post("$$ goes brrr"),
        post("lost $2K today"),
        post("worth $1T soon"),
    ];
    assert!(extract(&posts).is_empty());
}

#[test]
fn bare_dollar_sign_never_panics_and_never_counts() {
    let posts = vec![post("$ alone"), post("pay me $ now $")];
    assert!(extract(&posts).is_empty());
}

#[test]
fn plain_words_are_not_tickers() {
    let posts = vec![post("GME to the moon AAPL TSLA")];
    assert!(extract(&posts).is_empty());
}

#[test]
fn strips_punctuation_around_cashtags() {
    let posts = vec![post("($gme), \"$AMC!\" and $BB..."), post("$GME?!")];
    let map = extract(&posts);
    assert_eq!(map.get("GME").copied(), Some(2));
    assert_eq!(map.get("AMC").copied(), Some(1));
    assert_eq!(map.get("BB").copied(), Some(1));
}

#[test]
fn survives_arbitrary_unicode_punctuation() {
    let posts = vec![
        post("“$GME”🚀 — to the möön…"),
        post("【$AMC】→ 💎🙌"),
        post("¯\\_(ツ)_/¯ こんにちは £€¥"),
    ];
    let map = extract(&posts);
    assert_eq!(map.get("GME").copied(), Some(1));
    assert_eq!(map.get("AMC").copied(), Some(1));
    assert_eq!(map.len(), 2);
}

#[test]
fn is_idempotent_over_the_same_input() {
    let posts = vec![post("$GME $amc yolo"), post("$GME again")];
    assert_eq!(extract(&posts), extract(&posts));
}

#[test]
fn empty_input_yields_empty_map() {
    assert!(extract(&[]).is_empty());
}

#[test]
fn end_to_end_extraction_example() {
    // The canonical batch: one real ticker mentioned twice, one option-chain
    // lookalike, one denomination.
    let posts = vec![
        post("$GME to the moon"),
        post("$gme mooning"),
        post("$AAPL5 options"),
        post("$5M yolo"),
    ];
    let map = extract(&posts);
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("GME").copied(), Some(2));
    assert_eq!(rank(&map, 3), vec!["GME".to_string()]);
}
