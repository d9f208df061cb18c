//! Mock LLM Provider: deterministic replies for running without API keys.

use crate::llm::{CompletionParams, LlmClient};
use anyhow::Result;

const DEFAULT_REPLY: &str = r#"```json
{"anger": 0.02, "anticipation": 0.35, "disgust": 0.01, "fear": 0.03,
 "joy": 0.82, "sadness": 0.02, "surprise": 0.2, "trust": 0.6}
```"#;

#[derive(Debug, Clone)]
pub struct MockProvider {
    model: String,
    reply: String,
}

impl MockProvider {
    pub fn new(model: &str) -> Self {
        Self {
            model: model.to_string(),
            reply: DEFAULT_REPLY.to_string(),
        }
    }

    pub fn with_reply(mut self, reply: &str) -> Self {
        self.reply = reply.to_string();
        self
    }
}

#[async_trait::async_trait]
impl LlmClient for MockProvider {
    async fn complete(&self, _system: &str, _user: &str, _params: CompletionParams) -> Result<String> {
        tracing::debug!("Mock provider ({}) answering", self.model);
        Ok(self.reply.clone())
    }
}
