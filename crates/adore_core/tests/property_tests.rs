//! Property-based tests for adore_core.
//!
//! Uses proptest to verify invariants that must hold for ALL possible score
//! mappings, not just hand-picked examples.

use adore_core::{
    compute_adore_score, default_labels, render, to_radar_series, AdoreFormula, EmotionScores,
    FeedbackText, LexiconScorer, ThemeList,
};
use proptest::prelude::*;
use std::collections::BTreeMap;

// ============================================================================
// Strategies
// ============================================================================

/// Raw model output: any subset of the default labels, any f32 (including junk).
fn arb_raw_scores() -> impl Strategy<Value = Vec<(String, f32)>> {
    prop::collection::vec(
        (
            prop::sample::select(default_labels()),
            prop_oneof![
                -2.0f32..=2.0,
                Just(f32::NAN),
                Just(f32::INFINITY),
                Just(f32::NEG_INFINITY),
            ],
        ),
        0..16,
    )
}

fn arb_scores() -> impl Strategy<Value = EmotionScores> {
    arb_raw_scores().prop_map(|raw| EmotionScores::from_raw(&default_labels(), raw))
}

fn arb_weights() -> impl Strategy<Value = BTreeMap<String, f32>> {
    prop::collection::btree_map(prop::sample::select(default_labels()), -1.0f32..=3.0, 0..8)
}

fn arb_formula() -> impl Strategy<Value = AdoreFormula> {
    (arb_weights(), arb_weights()).prop_map(|(positive, negative)| AdoreFormula { positive, negative })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn scores_always_cover_exactly_the_vocabulary(raw in arb_raw_scores()) {
        let scores = EmotionScores::from_raw(&default_labels(), raw);
        let labels: Vec<&str> = scores.labels().collect();
        let mut expected = default_labels();
        expected.sort();
        prop_assert_eq!(labels, expected.iter().map(String::as_str).collect::<Vec<_>>());
        for (_, v) in scores.iter() {
            prop_assert!(v.is_finite() && (0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn adore_score_is_bounded_and_deterministic(scores in arb_scores(), formula in arb_formula()) {
        let a = compute_adore_score(&scores, &formula);
        let b = compute_adore_score(&scores, &formula);
        prop_assert!((0.0..=1.0).contains(&a));
        prop_assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn radar_series_is_order_stable(scores in arb_scores()) {
        let first = to_radar_series(&scores);
        let second = to_radar_series(&scores);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), scores.len());
    }

    #[test]
    fn json_roundtrip_preserves_mapping(scores in arb_scores()) {
        let json = serde_json::to_string(&scores).unwrap();
        let back: EmotionScores = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back.len(), scores.len());
        for (label, v) in scores.iter() {
            let other = back.get(label).unwrap();
            prop_assert!((other - v).abs() < 1e-6);
        }
    }

    #[test]
    fn render_never_fails(scores in arb_scores(), adore in 0.0f32..=1.0) {
        let view = render(&scores, adore, &ThemeList::default());
        prop_assert!(view.radar_svg.starts_with("<svg"));
        prop_assert!(view.radar_svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn non_blank_text_is_accepted(text in "[a-zA-Z!?., ]{0,40}") {
        let result = FeedbackText::new(&text);
        prop_assert_eq!(result.is_ok(), !text.trim().is_empty());
    }

    #[test]
    fn lexicon_scorer_output_is_valid(text in "\\PC{0,80}") {
        let scores = LexiconScorer::default().score_text(&text);
        prop_assert_eq!(scores.len(), default_labels().len());
        let adore = compute_adore_score(&scores, &AdoreFormula::default());
        prop_assert!((0.0..=1.0).contains(&adore));
    }
}
