use anyhow::Result;
use async_trait::async_trait;

/// Sampling parameters for one completion call.
#[derive(Debug, Clone)]
pub struct CompletionParams {
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature (0.0 - 2.0)
    pub temperature: f32,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            max_tokens: 512,
            temperature: 0.2,
        }
    }
}

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// One system + user turn; returns the reply text. One attempt, no retry.
    async fn complete(&self, system: &str, user: &str, params: CompletionParams) -> Result<String>;
}
