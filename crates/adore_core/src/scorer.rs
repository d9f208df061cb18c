use crate::emotion::{EmotionScores, FeedbackText};
use crate::error::{AnalysisError, AnalysisResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Narrow interface over whatever model turns text into emotion scores.
///
/// Implementations make a single attempt per call; failures surface as
/// [`AnalysisError::Inference`].
#[async_trait]
pub trait EmotionScorer: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// The fixed label vocabulary every returned mapping is keyed by.
    fn labels(&self) -> &[String];

    async fn score(&self, text: &FeedbackText) -> AnalysisResult<EmotionScores>;
}

/// Reject inputs longer than `max_chars` before any scoring work.
pub fn check_input_length(text: &FeedbackText, max_chars: usize) -> AnalysisResult<()> {
    let len = text.char_len();
    if len > max_chars {
        return Err(AnalysisError::inference(format!(
            "input is {} characters, the scorer accepts at most {}",
            len, max_chars
        )));
    }
    Ok(())
}

/// How a model-backed scorer is prompted.
///
/// `Single` asks for the score mapping in one call. `Separate` first asks the
/// model to detect the emotions present, then feeds that detection back in a
/// second call that produces the scores.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ScoringApproach {
    #[default]
    Single,
    Separate,
}

impl ScoringApproach {
    pub const ALL: [ScoringApproach; 2] = [ScoringApproach::Single, ScoringApproach::Separate];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringApproach::Single => "single",
            ScoringApproach::Separate => "separate",
        }
    }

    /// Label shown next to the selector on the dashboard.
    pub fn title(&self) -> &'static str {
        match self {
            ScoringApproach::Single => "Single Prompt",
            ScoringApproach::Separate => "Separate Prompts",
        }
    }
}

impl fmt::Display for ScoringApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoringApproach {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(ScoringApproach::Single),
            "separate" => Ok(ScoringApproach::Separate),
            other => Err(format!("Unknown scoring approach: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_check() {
        let text = FeedbackText::new("hello").unwrap();
        assert!(check_input_length(&text, 5).is_ok());
        let err = check_input_length(&text, 4).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::Inference("input is 5 characters, the scorer accepts at most 4".into())
        );
    }

    #[test]
    fn test_approach_parse() {
        assert_eq!("single".parse(), Ok(ScoringApproach::Single));
        assert_eq!(" Separate ".parse(), Ok(ScoringApproach::Separate));
        assert!("both".parse::<ScoringApproach>().is_err());
        assert_eq!(ScoringApproach::default(), ScoringApproach::Single);
    }

    #[test]
    fn test_approach_serde() {
        let json = serde_json::to_string(&ScoringApproach::Separate).unwrap();
        assert_eq!(json, "\"separate\"");
        let back: ScoringApproach = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ScoringApproach::Separate);
    }
}
