//! Server-rendered dashboard page.

use adore_core::{escape_text, Dashboard, ScoringApproach, SessionState};
use uuid::Uuid;

const TEMPLATE: &str = r##"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Emotion Analysis</title>
<style>
  body { background-color: #0E1117; color: #FAFAFA; font-family: "Source Sans Pro", sans-serif; margin: 0; }
  main { max-width: 1200px; margin: 0 auto; padding: 1rem 3rem; }
  h1, h2, h3, h4, h5 { color: #FAFAFA; font-weight: 500; }
  .input { max-width: 720px; margin: 0 auto; }
  textarea { width: 100%; height: 100px; background-color: #262730; color: #FAFAFA; border: none; border-radius: 4px; padding: 10px; font-size: 16px; box-sizing: border-box; }
  button { background-color: #FF4B4B; color: white; border: none; border-radius: 4px; padding: 0.5rem 2rem; font-weight: 500; margin-top: 0.5rem; cursor: pointer; }
  button:hover { background-color: #FF6B6B; }
  .approach { margin-bottom: 0.5rem; font-size: 14px; }
  .approach label { margin-right: 1.5rem; cursor: pointer; }
  .divider { border-bottom: 1px solid #333; margin: 1rem 0; }
  .columns { display: flex; gap: 2rem; flex-wrap: wrap; }
  .plot-container { background-color: #262730; border-radius: 4px; padding: 1.5rem; flex: 2; min-width: 320px; }
  .side { flex: 1; min-width: 260px; }
  .metric-label { font-size: 14px; }
  .metric-value { font-size: 48px; }
  .json-viewer { background-color: #262730; border-radius: 4px; padding: 1.5rem; margin-top: 1rem; font-family: monospace; white-space: pre; overflow-x: auto; }
  .theme-score { background-color: #262730; padding: 0.5rem 1rem; border-radius: 4px; margin: 0.25rem 0; }
  .banner { padding: 0.75rem 1rem; border-radius: 4px; margin: 0.5rem 0; }
  .error { background-color: rgba(255, 75, 75, 0.2); color: #FFB4B4; }
  .warning { background-color: rgba(255, 189, 69, 0.2); color: #FFE3A3; }
</style>
</head>
<body>
<main>
  <h1>Emotion Analysis</h1>
  <div class="input">
    <form method="post" action="/session/{SESSION_ID}/analyze">
      <div class="approach">Choose analysis approach:
        {APPROACH}
      </div>
      <textarea name="feedback" placeholder="Enter your feedback here...">{DRAFT}</textarea>
      <button type="submit">Analyze</button>
    </form>
    {BANNERS}
  </div>
  <div class="divider"></div>
  <div class="columns">
    <div class="plot-container">
{CHART}
    </div>
    <div class="side">
      <div class="metric-label">Adorescore</div>
      <div class="metric-value">{ADORE}</div>
      <div class="metric-label">{DOMINANT}</div>
      <div class="divider"></div>
      <h5>Analysis JSON</h5>
      <div class="json-viewer">{JSON}</div>
      <h5>Top Themes</h5>
      {THEMES}
    </div>
  </div>
</main>
</body>
</html>
"##;

/// Escape user-controlled text, including braces so it can never be
/// mistaken for a template placeholder.
fn escape_user(text: &str) -> String {
    escape_text(text).replace('{', "&#123;").replace('}', "&#125;")
}

fn approach_selector(selected: ScoringApproach) -> String {
    ScoringApproach::ALL
        .iter()
        .map(|approach| {
            let checked = if *approach == selected { " checked" } else { "" };
            format!(
                "<label><input type=\"radio\" name=\"approach\" value=\"{}\"{}> {}</label>",
                approach.as_str(),
                checked,
                approach.title()
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

pub fn render_page(dashboard: &Dashboard, state: &SessionState, session_id: Uuid) -> String {
    let view = dashboard.view(state);
    let approach = state.approach.unwrap_or(dashboard.default_approach());

    let mut banners = String::new();
    if let Some(err) = &state.error {
        banners.push_str(&format!(
            "<div class=\"banner error\">{}</div>",
            escape_user(err)
        ));
    }
    if let Some(notice) = &state.notice {
        banners.push_str(&format!(
            "<div class=\"banner warning\">{}</div>",
            escape_user(notice)
        ));
    }

    let (adore, dominant) = match &state.analysis {
        Some(a) => (
            format!("+{}", view.adore_display),
            a.dominant
                .as_deref()
                .map(|d| format!("Dominant emotion: {}", escape_user(d)))
                .unwrap_or_default(),
        ),
        None => ("&ndash;".to_string(), String::new()),
    };

    let themes = view
        .themes
        .as_slice()
        .iter()
        .map(|t| format!("<div class=\"theme-score\">{}</div>", escape_user(t)))
        .collect::<Vec<_>>()
        .join("\n      ");

    TEMPLATE
        .replace("{SESSION_ID}", &session_id.to_string())
        .replace("{APPROACH}", &approach_selector(approach))
        .replace("{CHART}", &view.radar_svg)
        .replace("{ADORE}", &adore)
        .replace("{DOMINANT}", &dominant)
        .replace("{JSON}", &escape_user(&view.scores_json))
        .replace("{THEMES}", &themes)
        .replace("{BANNERS}", &banners)
        .replace("{DRAFT}", &escape_user(&state.draft))
}
