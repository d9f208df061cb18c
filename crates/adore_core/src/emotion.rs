//! Feedback input and per-label emotion scores.
//!
//! `EmotionScores` always carries exactly the scorer's label vocabulary:
//! raw model output is normalized through [`EmotionScores::from_raw`] so the
//! presentation layer never has to deal with missing or foreign labels.

use crate::error::{AnalysisError, AnalysisResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Plutchik's eight primary emotions, the default label vocabulary.
pub const DEFAULT_LABELS: &[&str] = &[
    "anger",
    "anticipation",
    "disgust",
    "fear",
    "joy",
    "sadness",
    "surprise",
    "trust",
];

pub fn default_labels() -> Vec<String> {
    DEFAULT_LABELS.iter().map(|s| s.to_string()).collect()
}

/// Non-empty customer feedback text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FeedbackText(String);

impl FeedbackText {
    /// Trims surrounding whitespace; rejects blank input.
    pub fn new(text: &str) -> AnalysisResult<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl std::fmt::Display for FeedbackText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Guard against NaN/Inf and out-of-range model output.
#[inline]
fn sanitize_score(label: &str, v: f32) -> f32 {
    if v.is_finite() {
        v.clamp(0.0, 1.0)
    } else {
        tracing::warn!("Non-finite score for '{}', using 0.0", label);
        0.0
    }
}

/// Mapping from emotion label to a score in `[0, 1]`.
///
/// Multi-label: scores are independent and need not sum to 1.
/// Iteration order is lexicographic by label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmotionScores(BTreeMap<String, f32>);

impl EmotionScores {
    /// Normalize raw model output onto the fixed vocabulary `labels`.
    ///
    /// Missing labels score 0.0, unknown labels are dropped, values are
    /// clamped into `[0, 1]`. Label matching ignores ASCII case.
    pub fn from_raw<I>(labels: &[String], raw: I) -> Self
    where
        I: IntoIterator<Item = (String, f32)>,
    {
        let mut map: BTreeMap<String, f32> =
            labels.iter().map(|l| (l.clone(), 0.0)).collect();

        for (key, value) in raw {
            let key = key.trim().to_ascii_lowercase();
            match labels.iter().find(|l| l.eq_ignore_ascii_case(&key)) {
                Some(label) => {
                    map.insert(label.clone(), sanitize_score(label, value));
                }
                None => tracing::debug!("Dropping label '{}' outside the vocabulary", key),
            }
        }

        Self(map)
    }

    pub fn get(&self, label: &str) -> Option<f32> {
        self.0.get(label).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Highest-scoring label. Ties go to the lexicographically first label;
    /// an all-zero mapping has no dominant emotion.
    pub fn dominant(&self) -> Option<(&str, f32)> {
        let mut best: Option<(&str, f32)> = None;
        for (label, score) in self.iter() {
            if score <= 0.0 {
                continue;
            }
            match best {
                Some((_, s)) if s >= score => {}
                _ => best = Some((label, score)),
            }
        }
        best
    }

    /// Verbatim `{label: score}` JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        default_labels()
    }

    #[test]
    fn test_feedback_text_rejects_blank() {
        assert_eq!(FeedbackText::new(""), Err(AnalysisError::EmptyInput));
        assert_eq!(FeedbackText::new("   \n\t"), Err(AnalysisError::EmptyInput));
    }

    #[test]
    fn test_feedback_text_trims() {
        let text = FeedbackText::new("  great service  ").unwrap();
        assert_eq!(text.as_str(), "great service");
        assert_eq!(text.char_len(), 13);
    }

    #[test]
    fn test_from_raw_fills_missing_labels() {
        let scores = EmotionScores::from_raw(&labels(), vec![("joy".to_string(), 0.8)]);
        assert_eq!(scores.len(), DEFAULT_LABELS.len());
        assert_eq!(scores.get("joy"), Some(0.8));
        assert_eq!(scores.get("anger"), Some(0.0));
    }

    #[test]
    fn test_from_raw_drops_unknown_and_clamps() {
        let raw = vec![
            ("Joy".to_string(), 1.7),
            ("boredom".to_string(), 0.4),
            ("fear".to_string(), -0.2),
            ("sadness".to_string(), f32::NAN),
        ];
        let scores = EmotionScores::from_raw(&labels(), raw);
        assert_eq!(scores.get("joy"), Some(1.0));
        assert_eq!(scores.get("fear"), Some(0.0));
        assert_eq!(scores.get("sadness"), Some(0.0));
        assert!(scores.get("boredom").is_none());
        assert_eq!(scores.len(), DEFAULT_LABELS.len());
    }

    #[test]
    fn test_dominant() {
        let scores = EmotionScores::from_raw(
            &labels(),
            vec![("joy".to_string(), 0.82), ("trust".to_string(), 0.6)],
        );
        assert_eq!(scores.dominant(), Some(("joy", 0.82)));

        let zero = EmotionScores::from_raw(&labels(), Vec::new());
        assert!(zero.dominant().is_none());
        assert!(EmotionScores::default().dominant().is_none());
    }

    #[test]
    fn test_json_roundtrip() {
        let scores = EmotionScores::from_raw(
            &labels(),
            vec![("joy".to_string(), 0.82), ("sadness".to_string(), 0.02)],
        );
        let json = scores.to_json_pretty().unwrap();
        let back: EmotionScores = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), scores.len());
        for (label, value) in scores.iter() {
            let other = back.get(label).unwrap();
            assert!((other - value).abs() < 1e-6);
        }
    }

    #[test]
    fn test_json_is_flat_object() {
        let scores = EmotionScores::from_raw(&["joy".to_string()], vec![("joy".to_string(), 0.5)]);
        let value = serde_json::to_value(&scores).unwrap();
        assert_eq!(value, serde_json::json!({"joy": 0.5}));
    }
}
