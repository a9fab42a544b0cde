//! Property-based tests for vector parsing and scoring.
//!
//! Arbitrary input must never panic, and every well-formed vector must
//! score inside the CVSS range regardless of segment order.

use cvss_scorer::scoring::table_for;
use cvss_scorer::{
    round_up_1dp, score_vector, Metric, ScopeFlags, ScoreEngine, ScoreResult, VectorParser,
};
use proptest::prelude::*;

fn letters_for(metric: Metric) -> Vec<char> {
    match table_for(metric, ScopeFlags::default()) {
        Some(table) => table.entries().iter().map(|(letter, _)| *letter).collect(),
        None => vec!['U', 'C'],
    }
}

/// Zero or one segment for a metric, with a letter from its table.
fn segment(metric: Metric) -> impl Strategy<Value = Option<String>> {
    prop::option::of(
        prop::sample::select(letters_for(metric))
            .prop_map(move |letter| format!("{}:{letter}", metric.abbreviation())),
    )
}

/// Valid segments with no metric repeated, in canonical order.
fn valid_segments() -> impl Strategy<Value = Vec<String>> {
    Metric::ALL
        .iter()
        .map(|metric| segment(*metric))
        .collect::<Vec<_>>()
        .prop_map(|segments| segments.into_iter().flatten().collect())
}

fn all_fields(r: &ScoreResult) -> [f64; 10] {
    [
        r.impact_subscore_base,
        r.impact_subscore,
        r.exploitability,
        r.base_score,
        r.temporal_score,
        r.modified_impact_subscore,
        r.modified_impact,
        r.modified_exploitability,
        r.environmental_score,
        r.overall_score,
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn parse_doesnt_panic(s in "\\PC{0,300}") {
        let _ = VectorParser::new().parse(&s);
        let _ = score_vector(&s);
    }

    #[test]
    fn segment_shaped_input_doesnt_panic(
        s in prop::string::string_regex(r"([A-Z]{1,3}:[A-Z]/){0,25}").unwrap()
    ) {
        // Any letter may be rejected, but only as a typed parse error
        if let Err(err) = score_vector(&s) {
            prop_assert!(err.parse_kind().is_some(), "{err}");
        }
    }

    #[test]
    fn valid_vectors_score_in_range(segments in valid_segments()) {
        let vector = segments.join("/");
        let scored = score_vector(&vector).expect("valid vector should score");

        for value in all_fields(&scored.result) {
            prop_assert!((0.0..=10.0).contains(&value), "{vector}: {value}");
        }
    }

    #[test]
    fn overall_is_the_maximum(segments in valid_segments()) {
        let r = score_vector(&segments.join("/")).expect("valid vector should score").result;

        prop_assert!(r.overall_score >= r.base_score);
        prop_assert!(r.overall_score >= r.temporal_score);
        prop_assert!(r.overall_score >= r.environmental_score);
        prop_assert!(r.overall_score >= r.modified_impact);
        prop_assert!(r.temporal_score <= r.base_score);
    }

    #[test]
    fn segment_order_is_irrelevant_without_duplicates(
        (ordered, shuffled) in valid_segments().prop_flat_map(|segments| {
            (Just(segments.clone()), Just(segments).prop_shuffle())
        })
    ) {
        let a = score_vector(&ordered.join("/")).expect("valid vector should score");
        let b = score_vector(&shuffled.join("/")).expect("valid vector should score");
        prop_assert_eq!(a.result, b.result);
    }

    #[test]
    fn canonical_vector_rescores_identically(segments in valid_segments()) {
        let scored = score_vector(&segments.join("/")).expect("valid vector should score");
        let rescored = score_vector(&scored.canonical_vector()).expect("canonical vector should score");
        prop_assert_eq!(scored.result, rescored.result);
    }

    #[test]
    fn compute_all_is_idempotent(segments in valid_segments()) {
        let engine = ScoreEngine::new();
        let map = VectorParser::new().parse(&segments.join("/")).expect("valid vector should parse");
        let input = engine.populate(&map).expect("valid vector should resolve");
        prop_assert_eq!(engine.compute_all(&input), engine.compute_all(&input));
    }

    #[test]
    fn round_up_yields_next_tenth(value in 0.0f64..10.0) {
        let rounded = round_up_1dp(value);
        let tenths = rounded * 10.0;

        prop_assert!((tenths - tenths.round()).abs() < 1e-9, "{value} -> {rounded}");
        prop_assert!(rounded >= value - 1e-5, "{value} -> {rounded}");
        prop_assert!(rounded < value + 0.1 + 1e-9, "{value} -> {rounded}");
    }
}
