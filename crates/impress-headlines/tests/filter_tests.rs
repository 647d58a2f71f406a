//! Headline filtering integration tests
//!
//! Covers the documented scenarios plus property-based checks of the
//! similarity metric and the filter.

use impress_headlines::{
    filter_similar_headlines, headline_similarity, parse_rows, FilterOptions, HeadlineFilter,
    ResultRow, SimilarityThreshold, DEFAULT_MAX_KEPT,
};
use proptest::prelude::*;
use rstest::rstest;

fn threshold(value: i64) -> SimilarityThreshold {
    SimilarityThreshold::try_from(value).unwrap()
}

/// Titles that share no character with each other
fn dissimilar_titles(count: usize) -> Vec<String> {
    let alphabet: Vec<char> = ('a'..='z').chain('0'..='9').collect();
    alphabet
        .iter()
        .take(count)
        .map(|c| c.to_string().repeat(6))
        .collect()
}

// === Scenarios ===

#[test]
fn test_punctuation_variant_is_suppressed() {
    let kept = filter_similar_headlines(
        vec!["Cats are great", "Cats are great!", "Dogs are cool"],
        threshold(80),
        DEFAULT_MAX_KEPT,
    );
    assert_eq!(kept, vec!["Cats are great", "Dogs are cool"]);
}

#[test]
fn test_dissimilar_titles_all_kept() {
    let titles = vec!["Apple", "Banana", "Cherry"];
    let kept = filter_similar_headlines(titles.clone(), threshold(80), DEFAULT_MAX_KEPT);
    assert_eq!(kept, titles);
}

#[test]
fn test_cap_keeps_first_twenty() {
    let titles = dissimilar_titles(25);
    let kept = filter_similar_headlines(titles.clone(), threshold(80), DEFAULT_MAX_KEPT);
    assert_eq!(kept.len(), 20);
    assert_eq!(kept, titles[..20].to_vec());
}

#[test]
fn test_zero_threshold_keeps_only_first() {
    let kept = filter_similar_headlines(
        vec!["Apple", "Banana", "Cherry", ""],
        threshold(0),
        DEFAULT_MAX_KEPT,
    );
    assert_eq!(kept, vec!["Apple"]);
}

#[test]
fn test_empty_titles_are_not_duplicates() {
    let kept = filter_similar_headlines(vec!["", ""], threshold(80), DEFAULT_MAX_KEPT);
    assert_eq!(kept, vec!["", ""]);

    let rows = vec![ResultRow::untitled(), ResultRow::untitled()];
    let kept = filter_similar_headlines(rows, threshold(80), DEFAULT_MAX_KEPT);
    assert_eq!(kept.len(), 2);
}

#[test]
fn test_threshold_hundred_only_drops_exact_matches() {
    let kept = filter_similar_headlines(
        vec!["Storm hits coast", "Storm hits the coast", "storm hits coast."],
        threshold(100),
        DEFAULT_MAX_KEPT,
    );
    assert_eq!(kept, vec!["Storm hits coast", "Storm hits the coast"]);
}

#[test]
fn test_json_rows_filtered_in_order() {
    let rows = parse_rows(
        r#"[
            {"index": 0, "entity": {"id": "1", "label": "Council approves new budget"}},
            {"index": 1, "entity": {"id": "2", "label": "Council Approves New Budget!"}},
            {"index": 2, "nid": 3},
            {"index": 3, "entity": {"id": "4", "label": "Local team wins final"}}
        ]"#,
    )
    .unwrap();

    let outcome = HeadlineFilter::default().apply(rows);

    let indices: Vec<Option<usize>> = outcome.kept.iter().map(|row| row.index).collect();
    assert_eq!(indices, vec![Some(0), Some(2), Some(3)]);
    assert_eq!(outcome.suppressed.len(), 1);
    assert_eq!(outcome.suppressed[0].index, 1);
    assert_eq!(outcome.suppressed[0].matched_index, 0);
}

#[test]
fn test_report_serializes() {
    let outcome = HeadlineFilter::new(FilterOptions::default().with_max_kept(1))
        .apply(vec!["Apple", "Apple", "Banana"]);
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["kept"], serde_json::json!(["Apple"]));
    assert_eq!(json["input_len"], 3);
    assert_eq!(json["truncated"], true);
    assert!(json["suppressed"].as_array().unwrap().is_empty());
}

// === Similarity scores ===

#[rstest]
#[case("Cats are great", "Cats are great", 100.0)]
#[case("Cats are great", "Cats are great!", 100.0)]
#[case("World", "Word", 800.0 / 9.0)]
#[case("bafoobar", "barfoo", 1000.0 / 14.0)]
#[case("abc", "xyz", 0.0)]
#[case("", "abc", 0.0)]
#[case("", "", 0.0)]
fn test_headline_similarity_cases(#[case] a: &str, #[case] b: &str, #[case] expected: f64) {
    let score = headline_similarity(a, b);
    assert!(
        (score - expected).abs() < 1e-9,
        "similarity({:?}, {:?}) = {}, expected {}",
        a,
        b,
        score,
        expected
    );
}

#[rstest]
#[case(0, true)]
#[case(80, true)]
#[case(88, true)]
#[case(89, false)]
#[case(100, false)]
fn test_threshold_boundary(#[case] value: i64, #[case] suppressed: bool) {
    // "World" vs "Word" scores 88.89
    let kept = filter_similar_headlines(vec!["World", "Word"], threshold(value), DEFAULT_MAX_KEPT);
    assert_eq!(kept.len() == 1, suppressed, "threshold {}", value);
}

// === Property-Based Tests ===

proptest! {
    #[test]
    fn test_similarity_bounds(a in "[a-zA-Z0-9 !,.]{0,30}", b in "[a-zA-Z0-9 !,.]{0,30}") {
        let score = headline_similarity(&a, &b);
        prop_assert!((0.0..=100.0).contains(&score), "score out of range: {}", score);
    }

    #[test]
    fn test_similarity_symmetric(a in "[a-z ]{0,20}", b in "[a-z ]{0,20}") {
        prop_assert_eq!(headline_similarity(&a, &b), headline_similarity(&b, &a));
    }

    #[test]
    fn test_similarity_identity(a in "[a-zA-Z0-9 !?]{1,30}") {
        prop_assert_eq!(headline_similarity(&a, &a), 100.0);
    }

    #[test]
    fn test_empty_scores_zero(a in "[a-zA-Z0-9 ]{0,30}") {
        prop_assert_eq!(headline_similarity("", &a), 0.0);
        prop_assert_eq!(headline_similarity(&a, ""), 0.0);
    }

    #[test]
    fn test_filter_cap_and_order(
        titles in prop::collection::vec("[a-d ]{0,8}", 0..40),
        value in 0i64..=100,
        cap in 0usize..25,
    ) {
        let kept = filter_similar_headlines(titles.clone(), threshold(value), cap);

        prop_assert!(kept.len() <= titles.len().min(cap));

        // Kept titles appear in the input in the same relative order
        let mut remaining = titles.iter();
        for title in &kept {
            prop_assert!(remaining.any(|candidate| candidate == title));
        }
    }

    #[test]
    fn test_filter_idempotent(
        titles in prop::collection::vec("[a-f ]{0,10}", 0..30),
        value in 0i64..=100,
    ) {
        let once = filter_similar_headlines(titles, threshold(value), DEFAULT_MAX_KEPT);
        let twice = filter_similar_headlines(once.clone(), threshold(value), DEFAULT_MAX_KEPT);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_kept_titles_pairwise_below_threshold(
        titles in prop::collection::vec("[a-e]{1,8}", 0..30),
        value in 1i64..=100,
    ) {
        let t = threshold(value);
        let kept = filter_similar_headlines(titles, t, DEFAULT_MAX_KEPT);
        for (i, a) in kept.iter().enumerate() {
            for b in &kept[i + 1..] {
                let score = headline_similarity(a, b);
                prop_assert!(!t.is_met_by(score), "{:?} and {:?} both kept at {}", a, b, score);
            }
        }
    }
}
