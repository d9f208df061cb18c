use adore_core::{adore_display, Analysis, EmotionScores, RadarSeries, ScoringApproach, ThemeList};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    /// Defaults to the configured approach.
    #[serde(default)]
    pub approach: Option<ScoringApproach>,
}

/// Form body of `POST /session/{id}/analyze`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub feedback: String,
    /// Value of the approach radio group; unknown values are ignored.
    #[serde(default)]
    pub approach: Option<String>,
}

/// Successful analysis returned by the JSON API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub scores: EmotionScores,
    pub adore_score: f32,
    pub adore_display: String,
    pub radar: RadarSeries,
    #[serde(default)]
    pub dominant: Option<String>,
    #[serde(default)]
    pub approach: ScoringApproach,
    pub themes: ThemeList,
}

impl AnalyzeResponse {
    pub fn new(analysis: Analysis, themes: ThemeList) -> Self {
        Self {
            adore_display: adore_display(analysis.adore_score),
            scores: analysis.scores,
            adore_score: analysis.adore_score,
            radar: analysis.radar,
            dominant: analysis.dominant,
            approach: analysis.approach,
            themes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
