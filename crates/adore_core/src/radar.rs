use crate::emotion::EmotionScores;
use serde::{Deserialize, Serialize};

/// One axis of the radar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarPoint {
    pub label: String,
    pub value: f32,
}

/// Ordered `(label, value)` sequence driving a radial chart, one axis per label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RadarSeries(Vec<RadarPoint>);

impl RadarSeries {
    pub fn points(&self) -> &[RadarPoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Angle (radians) of axis `index`, starting at 12 o'clock, clockwise.
    pub fn axis_angle(&self, index: usize) -> f64 {
        let n = self.0.len().max(1) as f64;
        -std::f64::consts::FRAC_PI_2 + std::f64::consts::TAU * index as f64 / n
    }

    /// Polygon vertices for the series around `(cx, cy)` at full radius `radius`.
    pub fn vertices(&self, cx: f64, cy: f64, radius: f64) -> Vec<(f64, f64)> {
        self.0
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let angle = self.axis_angle(i);
                let r = radius * p.value.clamp(0.0, 1.0) as f64;
                (cx + r * angle.cos(), cy + r * angle.sin())
            })
            .collect()
    }
}

/// Lexicographic by label, so axis order is reproducible for a given label set.
pub fn to_radar_series(scores: &EmotionScores) -> RadarSeries {
    RadarSeries(
        scores
            .iter()
            .map(|(label, value)| RadarPoint {
                label: label.to_string(),
                value,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotion::{default_labels, DEFAULT_LABELS};

    #[test]
    fn test_one_axis_per_label_in_lexicographic_order() {
        let scores = EmotionScores::from_raw(&default_labels(), vec![("joy".to_string(), 0.82)]);
        let series = to_radar_series(&scores);
        assert_eq!(series.len(), DEFAULT_LABELS.len());
        let labels: Vec<&str> = series.points().iter().map(|p| p.label.as_str()).collect();
        let mut sorted = labels.clone();
        sorted.sort();
        assert_eq!(labels, sorted);
    }

    #[test]
    fn test_order_stable_across_calls() {
        let labels = vec!["zeal".to_string(), "awe".to_string(), "joy".to_string()];
        let scores = EmotionScores::from_raw(&labels, vec![("awe".to_string(), 0.3)]);
        assert_eq!(to_radar_series(&scores), to_radar_series(&scores));
        assert_eq!(to_radar_series(&scores).points()[0].label, "awe");
    }

    #[test]
    fn test_empty_scores_give_empty_series() {
        let series = to_radar_series(&EmotionScores::default());
        assert!(series.is_empty());
        assert!(series.vertices(100.0, 100.0, 50.0).is_empty());
    }

    #[test]
    fn test_first_vertex_points_up() {
        let scores = EmotionScores::from_raw(
            &["a".to_string(), "b".to_string()],
            vec![("a".to_string(), 1.0), ("b".to_string(), 0.5)],
        );
        let v = to_radar_series(&scores).vertices(100.0, 100.0, 50.0);
        assert!((v[0].0 - 100.0).abs() < 1e-9);
        assert!((v[0].1 - 50.0).abs() < 1e-9);
        // second axis is opposite the first for two labels
        assert!((v[1].1 - 125.0).abs() < 1e-9);
    }
}
