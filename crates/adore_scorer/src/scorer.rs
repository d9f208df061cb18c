use crate::llm::{CompletionParams, LlmClient};
use crate::parse::{parse_raw_scores, strip_code_fences};
use crate::prompts::SeparatePrompts;
use adore_core::{
    check_input_length, AnalysisError, AnalysisResult, EmotionScorer, EmotionScores, FeedbackText,
};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

enum Pipeline {
    /// One call returns the score mapping.
    Single { system_prompt: String },
    /// Detection call, then a scoring call that sees the detection.
    Separate(SeparatePrompts),
}

/// [`EmotionScorer`] backed by a chat-completion model.
pub struct LlmEmotionScorer {
    client: Arc<dyn LlmClient>,
    labels: Vec<String>,
    pipeline: Pipeline,
    max_input_chars: usize,
    params: CompletionParams,
}

impl LlmEmotionScorer {
    pub fn new(
        client: Arc<dyn LlmClient>,
        labels: Vec<String>,
        system_prompt: String,
        max_input_chars: usize,
        params: CompletionParams,
    ) -> Self {
        Self {
            client,
            labels,
            pipeline: Pipeline::Single { system_prompt },
            max_input_chars,
            params,
        }
    }

    pub fn separate(
        client: Arc<dyn LlmClient>,
        labels: Vec<String>,
        prompts: SeparatePrompts,
        max_input_chars: usize,
        params: CompletionParams,
    ) -> Self {
        Self {
            client,
            labels,
            pipeline: Pipeline::Separate(prompts),
            max_input_chars,
            params,
        }
    }

    async fn call(&self, stage: &str, system: &str, user: &str) -> AnalysisResult<String> {
        tracing::info!("Sending {} request to emotion model", stage);
        let reply = self
            .client
            .complete(system, user, self.params.clone())
            .await
            .map_err(|e| AnalysisError::inference(format!("{:#}", e)))?;
        tracing::info!("Received {} response from emotion model", stage);
        Ok(reply)
    }

    async fn detect(&self, prompt: &str, text: &FeedbackText) -> AnalysisResult<Value> {
        let reply = self.call("detection", prompt, text.as_str()).await?;
        serde_json::from_str(&strip_code_fences(&reply)).map_err(|e| {
            tracing::error!("Error parsing detection response: {}", reply);
            AnalysisError::inference(format!("emotion detection reply is not JSON: {}", e))
        })
    }
}

#[async_trait]
impl EmotionScorer for LlmEmotionScorer {
    fn name(&self) -> &str {
        match self.pipeline {
            Pipeline::Single { .. } => "llm",
            Pipeline::Separate(_) => "llm-separate",
        }
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }

    async fn score(&self, text: &FeedbackText) -> AnalysisResult<EmotionScores> {
        check_input_length(text, self.max_input_chars)?;

        let reply = match &self.pipeline {
            Pipeline::Single { system_prompt } => {
                self.call("scoring", system_prompt, text.as_str()).await?
            }
            Pipeline::Separate(prompts) => {
                let detection = self.detect(&prompts.detection, text).await?;
                let combined = json!({ "text": text.as_str(), "detection": detection });
                self.call("scoring", &prompts.scoring, &combined.to_string())
                    .await?
            }
        };

        let raw = parse_raw_scores(&reply).map_err(AnalysisError::Inference)?;
        Ok(EmotionScores::from_raw(&self.labels, raw))
    }
}
