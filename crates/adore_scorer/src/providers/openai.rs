//! OpenAI-compatible chat-completions provider.
//!
//! Works against any endpoint speaking the `/chat/completions` dialect,
//! including Google's OpenAI-compatible Gemini API (the default).

use crate::llm::{CompletionParams, LlmClient};
use adore_core::config::LlmConfig;
use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::{json, Value};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(model: &str, base_url: &str, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }

    /// Key from `GEMINI_API_KEY`, falling back to `OPENAI_API_KEY`.
    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("OPENAI_API_KEY"))
            .ok()
            .filter(|k| !k.trim().is_empty());
        if api_key.is_none() {
            tracing::warn!("No GEMINI_API_KEY or OPENAI_API_KEY set; inference calls will fail");
        }
        Self::new(
            &config.model,
            &config.base_url(),
            api_key,
            Duration::from_secs(config.timeout_secs),
        )
    }
}

fn build_openai_messages(system: &str, user: &str) -> Vec<Value> {
    vec![
        json!({"role": "system", "content": system}),
        json!({"role": "user", "content": user}),
    ]
}

#[async_trait::async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(&self, system: &str, user: &str, params: CompletionParams) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .context("No API key configured (set GEMINI_API_KEY or OPENAI_API_KEY)")?;

        let payload = json!({
            "model": self.model,
            "n": 1,
            "messages": build_openai_messages(system, user),
            "max_tokens": params.max_tokens,
            "temperature": params.temperature,
        });

        let url = format!("{}/chat/completions", self.base_url);
        tracing::debug!("Sending chat completion to {} (model {})", url, self.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .context("Failed to send request to model endpoint")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "Model API error ({}): {}",
                status,
                error_text.chars().take(200).collect::<String>()
            );
        }

        let resp_json: Value = response
            .json()
            .await
            .context("Model endpoint returned invalid JSON")?;
        let content = resp_json["choices"][0]["message"]["content"]
            .as_str()
            .context("Model response has no message content")?;
        if resp_json["choices"][0]["finish_reason"] == "length" {
            tracing::warn!("Model reply was truncated at max_tokens");
        }

        Ok(content.to_string())
    }
}
