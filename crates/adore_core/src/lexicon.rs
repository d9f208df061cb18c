//! Keyword-based English emotion scorer.
//!
//! Works offline and deterministically. Used for demos, tests and as the
//! `lexicon` provider; real deployments should point at a model.

use crate::emotion::{default_labels, EmotionScores, FeedbackText};
use crate::error::AnalysisResult;
use crate::scorer::{check_input_length, EmotionScorer};
use async_trait::async_trait;

const KEYWORDS: &[(&str, &[&str])] = &[
    (
        "anger",
        &["angry", "furious", "outraged", "annoyed", "rage", "livid", "unacceptable"],
    ),
    (
        "anticipation",
        &["expect", "expecting", "looking forward", "can't wait", "hope", "eager", "soon"],
    ),
    (
        "disgust",
        &["disgusting", "gross", "awful", "terrible", "horrible", "worst", "nasty"],
    ),
    (
        "fear",
        &["afraid", "scared", "worried", "anxious", "nervous", "unsafe"],
    ),
    (
        "joy",
        &[
            "love", "loved", "happy", "great", "amazing", "excellent", "wonderful",
            "delighted", "exceeded", "fantastic", "awesome", "pleased", "enjoy", "enjoyed",
        ],
    ),
    (
        "sadness",
        &["sad", "disappointed", "disappointing", "unhappy", "sorry", "regret", "miss", "let down"],
    ),
    (
        "surprise",
        &["surprised", "unexpected", "wow", "shocked", "astonished", "suddenly"],
    ),
    (
        "trust",
        &["reliable", "trust", "recommend", "dependable", "honest", "consistent", "safe"],
    ),
];

const INTENSIFIERS: &[&str] = &["very", "so", "really", "extremely", "absolutely"];

const HITS_FOR_FULL_SCORE: f32 = 2.0;
const INTENSIFIER_BOOST: f32 = 0.15;

#[derive(Debug, Clone)]
pub struct LexiconScorer {
    labels: Vec<String>,
    max_input_chars: Option<usize>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new(default_labels())
    }
}

impl LexiconScorer {
    /// Labels without a keyword list always score 0.0.
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            labels,
            max_input_chars: None,
        }
    }

    pub fn with_max_input_chars(mut self, max_chars: usize) -> Self {
        self.max_input_chars = Some(max_chars);
        self
    }

    pub fn score_text(&self, text: &str) -> EmotionScores {
        let lower = text.to_lowercase();
        let words = tokenize(&lower);
        let intense = lower.contains('!') || INTENSIFIERS.iter().any(|w| contains_phrase(&words, w));

        let raw = KEYWORDS.iter().map(|(label, keywords)| {
            let hits = keywords
                .iter()
                .filter(|k| contains_phrase(&words, k))
                .count() as f32;
            let mut score = (hits / HITS_FOR_FULL_SCORE).min(1.0);
            if intense && score > 0.0 {
                score = (score + INTENSIFIER_BOOST).min(1.0);
            }
            (label.to_string(), score)
        });

        EmotionScores::from_raw(&self.labels, raw)
    }
}

/// Words of `text`, split on anything that is not alphanumeric or an apostrophe.
fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .filter(|w| !w.is_empty())
        .collect()
}

/// Whole-word match of a one- or multi-word phrase.
fn contains_phrase(words: &[&str], phrase: &str) -> bool {
    let parts: Vec<&str> = phrase.split_whitespace().collect();
    !parts.is_empty() && words.windows(parts.len()).any(|w| w == parts.as_slice())
}

#[async_trait]
impl EmotionScorer for LexiconScorer {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }

    async fn score(&self, text: &FeedbackText) -> AnalysisResult<EmotionScores> {
        if let Some(max) = self.max_input_chars {
            check_input_length(text, max)?;
        }
        Ok(self.score_text(text.as_str()))
    }
}
