use adore_core::{adore_display, Analysis, EmotionScores, ScoringApproach, ThemeList};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// JSON document printed by `analyze` and written per file by `batch`.
#[derive(Debug, Serialize)]
pub struct AnalysisReport<'a> {
    pub text: &'a str,
    pub scores: &'a EmotionScores,
    pub adore_score: f32,
    pub adore_display: String,
    pub dominant: Option<&'a str>,
    pub approach: ScoringApproach,
    pub themes: &'a ThemeList,
    pub analyzed_at: DateTime<Utc>,
}

impl<'a> AnalysisReport<'a> {
    pub fn new(analysis: &'a Analysis, themes: &'a ThemeList) -> Self {
        Self {
            text: &analysis.text,
            scores: &analysis.scores,
            adore_score: analysis.adore_score,
            adore_display: adore_display(analysis.adore_score),
            dominant: analysis.dominant.as_deref(),
            approach: analysis.approach,
            themes,
            analyzed_at: analysis.analyzed_at,
        }
    }
}
