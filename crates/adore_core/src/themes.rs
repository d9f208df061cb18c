use serde::{Deserialize, Serialize};

/// Dataset-level themes shown in the "Top Themes" panel.
///
/// Static reference data: never derived from the feedback being analyzed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeList(Vec<String>);

impl Default for ThemeList {
    fn default() -> Self {
        Self::new(
            [
                "Product quality",
                "Customer service",
                "Delivery speed",
                "Value for money",
                "Ease of use",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        )
    }
}

impl ThemeList {
    /// Blank entries are dropped; order is preserved.
    pub fn new(themes: Vec<String>) -> Self {
        Self(
            themes
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        )
    }

    /// Keep only the first `n` themes.
    pub fn top(mut self, n: usize) -> Self {
        self.0.truncate(n);
        self
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
