//! Turning a model's text reply into raw `(label, score)` pairs.
//!
//! Accepted shapes, with or without Markdown code fences:
//!
//! - flat: `{"joy": 0.8, "anger": 0.1}`
//! - nested: `{"emotions": {"joy": 0.8, ...}}`
//! - ranked: `{"emotions": {"primary": {"emotion": "joy", "intensity": 0.8},
//!   "secondary": {...}}}`
//!
//! Numbers may also arrive as numeric strings (`"0.8"`).

use serde_json::{Map, Value};

/// Strip ```` ```json ```` / ```` ``` ```` markers and surrounding whitespace.
pub fn strip_code_fences(reply: &str) -> String {
    reply.replace("```json", "").replace("```", "").trim().to_string()
}

fn as_score(value: &Value) -> Option<f32> {
    match value {
        Value::Number(n) => n.as_f64().map(|f| f as f32),
        Value::String(s) => s.trim().parse::<f32>().ok(),
        _ => None,
    }
}

fn ranked_entry(value: &Value) -> Option<(String, f32)> {
    let obj = value.as_object()?;
    let label = obj.get("emotion")?.as_str()?;
    let score = obj.get("intensity").or_else(|| obj.get("score")).and_then(as_score)?;
    Some((label.to_string(), score))
}

fn collect(obj: &Map<String, Value>) -> Vec<(String, f32)> {
    obj.iter()
        .filter_map(|(key, value)| match value {
            Value::Object(_) => ranked_entry(value),
            _ => as_score(value).map(|s| (key.clone(), s)),
        })
        .collect()
}

/// Parse a reply into raw pairs. `Err` carries a short description.
pub fn parse_raw_scores(reply: &str) -> Result<Vec<(String, f32)>, String> {
    let cleaned = strip_code_fences(reply);
    let value: Value = serde_json::from_str(&cleaned).map_err(|e| {
        tracing::error!("Error parsing JSON response: {}", cleaned);
        format!("model reply is not valid JSON ({})", e)
    })?;

    let root = value
        .as_object()
        .ok_or_else(|| "model reply is not a JSON object".to_string())?;

    let pairs = match root.get("emotions").and_then(Value::as_object) {
        Some(nested) => collect(nested),
        None => collect(root),
    };

    if pairs.is_empty() {
        return Err("model reply contained no emotion scores".to_string());
    }
    Ok(pairs)
}
