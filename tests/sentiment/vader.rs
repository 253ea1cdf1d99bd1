use wsb_pulse::{SentimentScorer, VaderScorer};

#[test]
fn scores_stay_in_compound_range() {
    let scorer = VaderScorer::new();
    for text in [
        "GameStop shares skyrocket in best rally ever",
        "Company collapses amid fraud allegations, worst day on record",
        "Quarterly report released on schedule",
    ] {
        let score = scorer.compound(text);
        assert!((-1.0..=1.0).contains(&score), "{text} -> {score}");
    }
}

#[test]
fn positive_and_negative_headlines_have_the_expected_sign() {
    let scorer = VaderScorer::new();
    assert!(scorer.compound("Amazing earnings, great growth, investors happy") > 0.0);
    assert!(scorer.compound("Terrible losses, awful quarter, investors angry") < 0.0);
}

#[test]
fn empty_text_scores_zero() {
    let scorer = VaderScorer::new();
    assert!((scorer.compound("")).abs() < 1e-12);
    assert!((scorer.compound("   ")).abs() < 1e-12);
}
