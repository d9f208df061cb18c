//! # Adore Core
//!
//! Domain of the feedback dashboard: text goes to an [`EmotionScorer`], the
//! resulting [`EmotionScores`] are turned into an adore score and a radar
//! series, and [`render`] produces what the page shows.

pub mod adore;
pub mod config;
pub mod emotion;
pub mod error;
pub mod lexicon;
pub mod radar;
pub mod render;
pub mod scorer;
pub mod session;
pub mod themes;

pub use adore::{adore_display, compute_adore_score, AdoreFormula, NEUTRAL_ADORE};
pub use config::AdoreConfig;
pub use emotion::{default_labels, EmotionScores, FeedbackText, DEFAULT_LABELS};
pub use error::{AnalysisError, AnalysisResult};
pub use lexicon::LexiconScorer;
pub use radar::{to_radar_series, RadarPoint, RadarSeries};
pub use render::{escape_text, render, RenderedView};
pub use scorer::{check_input_length, EmotionScorer, ScoringApproach};
pub use session::{Analysis, Dashboard, SessionState, SubmitOutcome};
pub use themes::ThemeList;
