//! Model-backed emotion scoring.
//!
//! Everything model-specific lives here so the dashboard only ever sees
//! [`adore_core::EmotionScorer`].

pub mod llm;
pub mod parse;
pub mod prompts;
pub mod providers;
pub mod scorer;

pub use llm::{CompletionParams, LlmClient};
pub use scorer::LlmEmotionScorer;

use adore_core::{AdoreConfig, EmotionScorer, LexiconScorer, ScoringApproach};
use anyhow::Result;
use providers::{MockProvider, OpenAiClient};
use std::sync::Arc;

/// Build the scorer selected by `llm.provider` for the configured approach.
pub fn build_scorer(config: &AdoreConfig) -> Result<Arc<dyn EmotionScorer>> {
    build_scorer_for(config, config.scorer.approach)
}

/// Build the scorer selected by `llm.provider` for `approach`.
///
/// The lexicon provider makes no model calls, so it ignores the approach.
pub fn build_scorer_for(
    config: &AdoreConfig,
    approach: ScoringApproach,
) -> Result<Arc<dyn EmotionScorer>> {
    let labels = config.scorer.labels.clone();
    if labels.is_empty() {
        anyhow::bail!("scorer.labels must not be empty");
    }
    let max_input_chars = config.scorer.max_input_chars;

    let client: Arc<dyn LlmClient> = match config.llm.provider.as_str() {
        "lexicon" => {
            tracing::info!("Using offline lexicon scorer");
            return Ok(Arc::new(
                LexiconScorer::new(labels).with_max_input_chars(max_input_chars),
            ));
        }
        "mock" => Arc::new(MockProvider::new(&config.llm.model)),
        "openai" | "gemini" => Arc::new(OpenAiClient::from_config(&config.llm)?),
        other => anyhow::bail!("Unknown LLM provider: {}", other),
    };

    tracing::info!(
        "Using {} provider with model {} ({} approach)",
        config.llm.provider,
        config.llm.model,
        approach
    );
    let params = CompletionParams {
        max_tokens: config.llm.max_tokens,
        temperature: config.llm.temperature,
    };

    let scorer = match approach {
        ScoringApproach::Single => {
            let system_prompt =
                prompts::load_system_prompt(config.scorer.system_prompt_path.as_deref(), &labels)?;
            LlmEmotionScorer::new(client, labels, system_prompt, max_input_chars, params)
        }
        ScoringApproach::Separate => {
            let prompts = prompts::load_separate_prompts(
                config.scorer.detection_prompt_path.as_deref(),
                config.scorer.scoring_prompt_path.as_deref(),
                &labels,
            )?;
            LlmEmotionScorer::separate(client, labels, prompts, max_input_chars, params)
        }
    };
    Ok(Arc::new(scorer))
}
