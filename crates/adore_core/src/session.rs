//! Per-action analysis handler and the explicit session state it updates.
//!
//! Each user action calls [`Dashboard::submit`] once: validate, score,
//! derive, store. Nothing survives between actions except the
//! [`SessionState`] the caller owns.

use crate::adore::{compute_adore_score, AdoreFormula, NEUTRAL_ADORE};
use crate::emotion::{EmotionScores, FeedbackText};
use crate::error::{AnalysisError, AnalysisResult};
use crate::radar::{to_radar_series, RadarSeries};
use crate::render::{render, RenderedView};
use crate::scorer::{EmotionScorer, ScoringApproach};
use crate::themes::ThemeList;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Result of one analysis cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub text: String,
    pub scores: EmotionScores,
    pub adore_score: f32,
    pub radar: RadarSeries,
    pub dominant: Option<String>,
    #[serde(default)]
    pub approach: ScoringApproach,
    pub analyzed_at: DateTime<Utc>,
}

/// Everything the dashboard needs to redraw one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Last successful analysis; kept when a later one fails.
    pub analysis: Option<Analysis>,
    pub error: Option<String>,
    pub notice: Option<String>,
    /// Text of the most recent submission, echoed back into the input box.
    pub draft: String,
    /// Approach picked on the page; `None` uses the dashboard default.
    #[serde(default)]
    pub approach: Option<ScoringApproach>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Analyzed,
    /// Blank input; the scorer was not called.
    Rejected,
    /// Scorer failed; the previous analysis is still shown.
    Failed,
}

pub struct Dashboard {
    scorers: BTreeMap<ScoringApproach, Arc<dyn EmotionScorer>>,
    default_approach: ScoringApproach,
    formula: AdoreFormula,
    themes: ThemeList,
}

impl Dashboard {
    /// `scorer` serves every approach until [`Dashboard::with_scorer`] replaces one.
    pub fn new(scorer: Arc<dyn EmotionScorer>, formula: AdoreFormula, themes: ThemeList) -> Self {
        let scorers = ScoringApproach::ALL
            .iter()
            .map(|approach| (*approach, scorer.clone()))
            .collect();
        Self {
            scorers,
            default_approach: ScoringApproach::default(),
            formula,
            themes,
        }
    }

    pub fn with_scorer(mut self, approach: ScoringApproach, scorer: Arc<dyn EmotionScorer>) -> Self {
        self.scorers.insert(approach, scorer);
        self
    }

    pub fn with_default_approach(mut self, approach: ScoringApproach) -> Self {
        self.default_approach = approach;
        self
    }

    pub fn default_approach(&self) -> ScoringApproach {
        self.default_approach
    }

    pub fn themes(&self) -> &ThemeList {
        &self.themes
    }

    /// Score `text` with the default approach.
    pub async fn analyze(&self, text: &str) -> AnalysisResult<Analysis> {
        self.analyze_with(text, self.default_approach).await
    }

    /// Score `text` and derive the adore score and radar series.
    pub async fn analyze_with(
        &self,
        text: &str,
        approach: ScoringApproach,
    ) -> AnalysisResult<Analysis> {
        let text = FeedbackText::new(text)?;
        let scorer = self.scorers.get(&approach).ok_or_else(|| {
            AnalysisError::inference(format!("no scorer configured for the {} approach", approach))
        })?;
        tracing::info!(
            "Analyzing feedback ({} chars) with {} ({} approach)",
            text.char_len(),
            scorer.name(),
            approach
        );

        let scores = scorer.score(&text).await?;
        let adore_score = compute_adore_score(&scores, &self.formula);
        let radar = to_radar_series(&scores);
        let dominant = scores.dominant().map(|(label, _)| label.to_string());

        tracing::info!(
            "Analysis complete: adore={:.2}, dominant={}",
            adore_score,
            dominant.as_deref().unwrap_or("none")
        );

        Ok(Analysis {
            text: text.to_string(),
            scores,
            adore_score,
            radar,
            dominant,
            approach,
            analyzed_at: Utc::now(),
        })
    }

    /// Handle one "Analyze" action against `state`, using the session's
    /// selected approach.
    pub async fn submit(&self, state: &mut SessionState, text: &str) -> SubmitOutcome {
        state.draft = text.to_string();
        state.error = None;
        state.notice = None;
        let approach = state.approach.unwrap_or(self.default_approach);

        match self.analyze_with(text, approach).await {
            Ok(analysis) => {
                state.analysis = Some(analysis);
                SubmitOutcome::Analyzed
            }
            Err(AnalysisError::EmptyInput) => {
                state.notice = Some(AnalysisError::EmptyInput.user_message());
                SubmitOutcome::Rejected
            }
            Err(e) => {
                tracing::error!("Analysis failed: {}", e);
                state.error = Some(e.user_message());
                SubmitOutcome::Failed
            }
        }
    }

    /// Display artifacts for the session's current analysis, or a placeholder.
    pub fn view(&self, state: &SessionState) -> RenderedView {
        match &state.analysis {
            Some(a) => render(&a.scores, a.adore_score, &self.themes),
            None => render(&EmotionScores::default(), NEUTRAL_ADORE, &self.themes),
        }
    }
}
