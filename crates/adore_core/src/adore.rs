//! Adore score: one scalar summarizing how positively the customer feels.
//!
//! ```text
//! pos   = max over positive labels l of (w_l * s_l)
//! neg   = max over negative labels l of (w_l * s_l)
//! adore = clamp((1 + pos - neg) / 2, 0, 1)
//! ```
//!
//! Scores are multi-label, so each side takes its peak rather than a sum.
//! An empty mapping is neutral (0.5).

use crate::emotion::EmotionScores;
use serde::Deserialize;
use std::collections::BTreeMap;

pub const NEUTRAL_ADORE: f32 = 0.5;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdoreFormula {
    /// Positive-affect labels and their weights in `[0, 1]`.
    pub positive: BTreeMap<String, f32>,
    /// Negative-affect labels and their weights in `[0, 1]`.
    pub negative: BTreeMap<String, f32>,
}

impl Default for AdoreFormula {
    fn default() -> Self {
        let weights = |pairs: &[(&str, f32)]| {
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<BTreeMap<_, _>>()
        };
        Self {
            positive: weights(&[
                ("joy", 1.0),
                ("trust", 0.8),
                ("anticipation", 0.6),
                ("surprise", 0.3),
            ]),
            negative: weights(&[
                ("anger", 1.0),
                ("disgust", 1.0),
                ("sadness", 0.9),
                ("fear", 0.8),
            ]),
        }
    }
}

fn weighted_peak(scores: &EmotionScores, weights: &BTreeMap<String, f32>) -> f32 {
    weights
        .iter()
        .filter_map(|(label, w)| {
            let w = if w.is_finite() { w.clamp(0.0, 1.0) } else { 0.0 };
            scores.get(label).map(|s| w * s)
        })
        .fold(0.0, f32::max)
}

/// Deterministic, bounded to `[0, 1]`.
pub fn compute_adore_score(scores: &EmotionScores, formula: &AdoreFormula) -> f32 {
    if scores.is_empty() {
        return NEUTRAL_ADORE;
    }
    let pos = weighted_peak(scores, &formula.positive);
    let neg = weighted_peak(scores, &formula.negative);
    let adore = (1.0 + pos - neg) / 2.0;
    if adore.is_finite() {
        adore.clamp(0.0, 1.0)
    } else {
        NEUTRAL_ADORE
    }
}

/// Integer percentage shown in the dashboard metric.
pub fn adore_display(adore: f32) -> String {
    format!("{}", (adore.clamp(0.0, 1.0) * 100.0).round() as u32)
}
