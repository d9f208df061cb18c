use anyhow::{Context, Result};
use std::path::Path;

/// Placeholder replaced with the comma-separated label list.
pub const LABELS_PLACEHOLDER: &str = "{labels}";

const DEFAULT_TEMPLATE: &str = "You are an emotion classifier for customer feedback.\n\
Rate how strongly the feedback expresses each of these emotions: {labels}.\n\
Each score is between 0 and 1. Scores are independent and do not need to sum to 1.\n\
Respond with only a JSON object mapping every label to its score, for example:\n\
{example}\n\
Do not add explanations or any other keys.";

const DETECTION_TEMPLATE: &str = "You detect emotions in customer feedback.\n\
List every emotion the feedback expresses, choosing only from: {labels}.\n\
For each one quote the words that show it.\n\
Respond with only a JSON object of the form\n\
{\"emotions\": [{\"emotion\": \"<label>\", \"evidence\": \"<quote>\"}]}\n\
Use an empty list when no emotion is present.";

const SCORING_TEMPLATE: &str = "You score emotions in customer feedback.\n\
The user message is a JSON object with the feedback under \"text\" and the\n\
emotions found by an earlier detection step under \"detection\".\n\
Using both, rate how strongly the feedback expresses each of: {labels}.\n\
Each score is between 0 and 1; emotions not detected should score near 0.\n\
Respond with only a JSON object mapping every label to its score, for example:\n\
{example}\n\
Do not add explanations or any other keys.";

/// Prompts for the two calls of the separate approach.
#[derive(Debug, Clone, PartialEq)]
pub struct SeparatePrompts {
    pub detection: String,
    pub scoring: String,
}

fn example_object(labels: &[String]) -> String {
    let body = labels
        .iter()
        .map(|l| format!("\"{}\": 0.0", l))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", body)
}

fn fill(template: &str, labels: &[String]) -> String {
    template
        .replace(LABELS_PLACEHOLDER, &labels.join(", "))
        .replace("{example}", &example_object(labels))
}

/// Built-in system prompt for the given vocabulary.
pub fn default_system_prompt(labels: &[String]) -> String {
    fill(DEFAULT_TEMPLATE, labels)
}

pub fn default_separate_prompts(labels: &[String]) -> SeparatePrompts {
    SeparatePrompts {
        detection: fill(DETECTION_TEMPLATE, labels),
        scoring: fill(SCORING_TEMPLATE, labels),
    }
}

fn read_override(path: &Path, labels: &[String]) -> Result<String> {
    let template = std::fs::read_to_string(path)
        .with_context(|| format!("System prompt file not found at {}", path.display()))?;
    tracing::info!("Loading system prompt from {}", path.display());
    Ok(template.replace(LABELS_PLACEHOLDER, &labels.join(", ")))
}

/// Read an override prompt from `path`, or build the default one.
///
/// `{labels}` in the file is substituted with the vocabulary.
pub fn load_system_prompt(path: Option<&Path>, labels: &[String]) -> Result<String> {
    match path {
        Some(p) => read_override(p, labels),
        None => Ok(default_system_prompt(labels)),
    }
}

/// Per-stage overrides for the separate approach; each falls back to its default.
pub fn load_separate_prompts(
    detection_path: Option<&Path>,
    scoring_path: Option<&Path>,
    labels: &[String],
) -> Result<SeparatePrompts> {
    let defaults = default_separate_prompts(labels);
    Ok(SeparatePrompts {
        detection: match detection_path {
            Some(p) => read_override(p, labels)?,
            None => defaults.detection,
        },
        scoring: match scoring_path {
            Some(p) => read_override(p, labels)?,
            None => defaults.scoring,
        },
    })
}
