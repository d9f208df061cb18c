use crate::adore::AdoreFormula;
use crate::emotion::default_labels;
use crate::scorer::ScoringApproach;
use crate::themes::ThemeList;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Google's OpenAI-compatible Gemini endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

// ============================================================================
// Top-level config
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AdoreConfig {
    pub llm: LlmConfig,
    pub scorer: ScorerConfig,
    pub adore: AdoreFormula,
    pub themes: ThemesConfig,
    pub gateway: GatewayConfig,
    pub logging: LoggingConfig,
}

impl AdoreConfig {
    /// Load config from a TOML file, falling back to defaults for missing fields.
    /// After loading, env var overrides are applied.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let mut config: AdoreConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML config")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from path; a missing file yields defaults with env overrides.
    /// A file that exists but does not parse is an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            return Self::load(path);
        }
        tracing::info!(
            "Config file {} not found, using defaults",
            path.as_ref().display()
        );
        let mut cfg = Self::default();
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("LLM_PROVIDER") {
            self.llm.provider = v;
        }
        if let Ok(v) = std::env::var("LLM_MODEL") {
            self.llm.model = v;
        }
        if let Ok(v) = std::env::var("LLM_BASE_URL") {
            self.llm.base_url = Some(v);
        }
        if let Ok(v) = std::env::var("LLM_TEMPERATURE") {
            if let Ok(n) = v.parse() {
                self.llm.temperature = n;
            }
        }
        if let Ok(v) = std::env::var("ADORE_APPROACH") {
            match v.parse() {
                Ok(approach) => self.scorer.approach = approach,
                Err(e) => tracing::warn!("Ignoring ADORE_APPROACH: {}", e),
            }
        }
        if let Ok(v) = std::env::var("ADORE_HOST") {
            self.gateway.host = v;
        }
        if let Ok(v) = std::env::var("ADORE_PORT") {
            if let Ok(n) = v.parse() {
                self.gateway.port = n;
            }
        }
    }

    pub fn theme_list(&self) -> ThemeList {
        ThemeList::new(self.themes.list.clone()).top(self.themes.top_n)
    }
}

// ============================================================================
// Sub-configs
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// "openai" (any OpenAI-compatible endpoint), "mock" or "lexicon".
    pub provider: String,
    pub model: String,
    pub base_url: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: "gemini-2.0-flash".to_string(),
            base_url: None,
            max_tokens: 512,
            temperature: 0.2,
            timeout_secs: 60,
        }
    }
}

impl LlmConfig {
    pub fn base_url(&self) -> String {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    /// Label vocabulary every score mapping is keyed by.
    pub labels: Vec<String>,
    /// Inputs longer than this (in characters) are rejected before inference.
    pub max_input_chars: usize,
    /// Approach used when a request does not pick one.
    pub approach: ScoringApproach,
    /// Replaces the built-in system prompt of the single-prompt approach.
    pub system_prompt_path: Option<PathBuf>,
    /// Replaces the emotion-detection prompt of the separate approach.
    pub detection_prompt_path: Option<PathBuf>,
    /// Replaces the scoring prompt of the separate approach.
    pub scoring_prompt_path: Option<PathBuf>,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            labels: default_labels(),
            max_input_chars: 8_000,
            approach: ScoringApproach::Single,
            system_prompt_path: None,
            detection_prompt_path: None,
            scoring_prompt_path: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemesConfig {
    pub list: Vec<String>,
    pub top_n: usize,
}

impl Default for ThemesConfig {
    fn default() -> Self {
        Self {
            list: ThemeList::default().as_slice().to_vec(),
            top_n: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
    /// Sessions kept in memory before the least recently used is evicted.
    pub max_sessions: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
            max_sessions: 1024,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    pub level: String,
    /// Directory for daily rolling log files; console only when unset.
    pub dir: Option<PathBuf>,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: None,
            json: false,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
