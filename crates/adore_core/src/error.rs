use thiserror::Error;

/// Errors raised by a single analysis cycle.
///
/// None of these are fatal to the process; each one is resolved at the
/// granularity of one user interaction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// The submitted feedback was empty or whitespace-only.
    #[error("feedback text is empty")]
    EmptyInput,

    /// The emotion scorer failed (model unavailable, bad reply, input too long).
    #[error("inference failed: {0}")]
    Inference(String),

    /// The score mapping could not be turned into display artifacts.
    #[error("render failed: {0}")]
    Render(String),
}

impl AnalysisError {
    pub fn inference(msg: impl Into<String>) -> Self {
        Self::Inference(msg.into())
    }

    /// Message suitable for showing in the dashboard.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyInput => "Please enter some feedback to analyze.".to_string(),
            Self::Inference(msg) => format!("An error occurred during analysis: {}", msg),
            Self::Render(msg) => format!("Failed to render analysis: {}", msg),
        }
    }
}

pub type AnalysisResult<T> = std::result::Result<T, AnalysisError>;
