use crate::page::render_page;
use crate::sessions::SessionStore;
use crate::types::{AnalyzeForm, AnalyzeRequest, AnalyzeResponse, ErrorBody};
use adore_core::config::GatewayConfig;
use adore_core::{AnalysisError, Dashboard, ScoringApproach, ThemeList};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
    routing::{get, post},
    Form, Json, Router,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

/// Shared state for the dashboard server.
#[derive(Clone)]
struct AppState {
    dashboard: Arc<Dashboard>,
    /// Per-session UI state; never locked across a scorer call.
    sessions: Arc<RwLock<SessionStore>>,
}

/// The dashboard HTTP server.
///
/// - `GET /`: open a new session
/// - `GET /session/{id}`: render the dashboard
/// - `POST /session/{id}/analyze`: form submit, then redirect back
/// - `POST /api/analyze`: JSON analysis
/// - `GET /api/themes`: configured theme list
/// - `GET /health`: health check
pub struct GatewayServer {
    dashboard: Arc<Dashboard>,
    sessions: Arc<RwLock<SessionStore>>,
    /// Bind address.
    host: String,
    port: u16,
}

impl GatewayServer {
    pub fn new(dashboard: Arc<Dashboard>, config: &GatewayConfig) -> Self {
        Self {
            dashboard,
            sessions: Arc::new(RwLock::new(SessionStore::new(config.max_sessions))),
            host: config.host.clone(),
            port: config.port,
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn router(&self) -> Router {
        let state = AppState {
            dashboard: self.dashboard.clone(),
            sessions: self.sessions.clone(),
        };

        Router::new()
            .route("/", get(new_session))
            .route("/health", get(health))
            .route("/session/:id", get(show_session))
            .route("/session/:id/analyze", post(submit_form))
            .route("/api/analyze", post(api_analyze))
            .route("/api/themes", get(api_themes))
            .layer(CorsLayer::permissive())
            .with_state(state)
    }

    /// Bind and serve until the listener fails.
    pub async fn serve(self) -> anyhow::Result<()> {
        let addr = self.address();
        let app = self.router();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| anyhow::anyhow!("Dashboard failed to bind {}: {}", addr, e))?;
        tracing::info!("Dashboard listening on http://{}", addr);
        axum::serve(listener, app).await?;
        Ok(())
    }
}

// ============================================================================
// Route handlers
// ============================================================================

async fn health() -> &'static str {
    "ok"
}

/// GET /: allocate a session id and send the browser to it.
async fn new_session(State(state): State<AppState>) -> Redirect {
    let id = Uuid::new_v4();
    state
        .sessions
        .write()
        .await
        .put(id, Default::default());
    tracing::debug!("Opened session {}", id);
    Redirect::to(&format!("/session/{}", id))
}

/// GET /session/{id}
async fn show_session(State(state): State<AppState>, Path(id): Path<Uuid>) -> Html<String> {
    let session = state.sessions.write().await.get(&id);
    Html(render_page(&state.dashboard, &session, id))
}

/// POST /session/{id}/analyze: one "Analyze" click.
async fn submit_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<AnalyzeForm>,
) -> Redirect {
    let mut session = state.sessions.write().await.get(&id);
    if let Some(value) = form.approach.as_deref() {
        match value.parse::<ScoringApproach>() {
            Ok(approach) => session.approach = Some(approach),
            Err(e) => tracing::warn!("Session {}: {}", id, e),
        }
    }
    let outcome = state.dashboard.submit(&mut session, &form.feedback).await;
    tracing::debug!("Session {} submit: {:?}", id, outcome);
    state.sessions.write().await.put(id, session);
    Redirect::to(&format!("/session/{}", id))
}

/// POST /api/analyze
async fn api_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, Json<ErrorBody>)> {
    let approach = req
        .approach
        .unwrap_or(state.dashboard.default_approach());
    match state.dashboard.analyze_with(&req.text, approach).await {
        Ok(analysis) => Ok(Json(AnalyzeResponse::new(
            analysis,
            state.dashboard.themes().clone(),
        ))),
        Err(e) => {
            let status = match e {
                AnalysisError::EmptyInput => StatusCode::BAD_REQUEST,
                AnalysisError::Inference(_) => StatusCode::BAD_GATEWAY,
                AnalysisError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            if status != StatusCode::BAD_REQUEST {
                tracing::error!("API analysis failed: {}", e);
            }
            Err((
                status,
                Json(ErrorBody {
                    error: e.user_message(),
                }),
            ))
        }
    }
}

/// GET /api/themes
async fn api_themes(State(state): State<AppState>) -> Json<ThemeList> {
    Json(state.dashboard.themes().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use adore_core::{
        AdoreFormula, AnalysisResult, EmotionScorer, EmotionScores, FeedbackText, LexiconScorer,
    };
    use async_trait::async_trait;
    use axum::response::IntoResponse;

    struct DownScorer(Vec<String>);

    #[async_trait]
    impl EmotionScorer for DownScorer {
        fn name(&self) -> &str {
            "down"
        }

        fn labels(&self) -> &[String] {
            &self.0
        }

        async fn score(&self, _text: &FeedbackText) -> AnalysisResult<EmotionScores> {
            Err(AnalysisError::inference("model unavailable"))
        }
    }

    fn app_state(scorer: Arc<dyn EmotionScorer>) -> AppState {
        AppState {
            dashboard: Arc::new(Dashboard::new(
                scorer,
                AdoreFormula::default(),
                ThemeList::default(),
            )),
            sessions: Arc::new(RwLock::new(SessionStore::new(8))),
        }
    }

    fn lexicon_state() -> AppState {
        app_state(Arc::new(LexiconScorer::default()))
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let result = health().await;
        assert_eq!(result, "ok");
    }

    #[tokio::test]
    async fn test_gateway_server_creates() {
        let state = lexicon_state();
        let config = GatewayConfig {
            host: "127.0.0.1".into(),
            port: 0,
            max_sessions: 4,
        };
        let server = GatewayServer::new(state.dashboard, &config);
        assert_eq!(server.address(), "127.0.0.1:0");
        let _router = server.router();
    }

    #[tokio::test]
    async fn test_new_session_redirects_and_registers() {
        let state = lexicon_state();
        let response = new_session(State(state.clone())).await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response.headers()["location"].to_str().unwrap().to_string();
        let id: Uuid = location.trim_start_matches("/session/").parse().unwrap();
        assert!(state.sessions.read().await.contains(&id));
    }

    #[tokio::test]
    async fn test_form_submit_updates_only_that_session() {
        let state = lexicon_state();
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());

        submit_form(
            State(state.clone()),
            Path(a),
            Form(AnalyzeForm {
                feedback: "Amazing quality, I love it".into(),
                approach: None,
            }),
        )
        .await;

        let mut store = state.sessions.write().await;
        let session_a = store.get(&a);
        assert!(session_a.analysis.is_some());
        assert_eq!(session_a.draft, "Amazing quality, I love it");
        assert!(store.get(&b).analysis.is_none());
    }

    /// Lexicon for the single approach, an outage for the separate one.
    fn split_state() -> AppState {
        let dashboard = Dashboard::new(
            Arc::new(LexiconScorer::default()),
            AdoreFormula::default(),
            ThemeList::default(),
        )
        .with_scorer(
            ScoringApproach::Separate,
            Arc::new(DownScorer(vec!["joy".into()])),
        );
        AppState {
            dashboard: Arc::new(dashboard),
            sessions: Arc::new(RwLock::new(SessionStore::new(8))),
        }
    }

    #[tokio::test]
    async fn test_form_approach_is_remembered_per_session() {
        let state = split_state();
        let id = Uuid::new_v4();

        submit_form(
            State(state.clone()),
            Path(id),
            Form(AnalyzeForm {
                feedback: "Great".into(),
                approach: Some("separate".into()),
            }),
        )
        .await;
        let session = state.sessions.write().await.get(&id);
        assert_eq!(session.approach, Some(ScoringApproach::Separate));
        assert!(session.error.as_deref().unwrap().contains("model unavailable"));

        submit_form(
            State(state.clone()),
            Path(id),
            Form(AnalyzeForm {
                feedback: "Great".into(),
                approach: Some("bogus".into()),
            }),
        )
        .await;
        let session = state.sessions.write().await.get(&id);
        assert_eq!(session.approach, Some(ScoringApproach::Separate));
    }

    #[tokio::test]
    async fn test_api_analyze_honors_requested_approach() {
        let Json(resp) = api_analyze(
            State(split_state()),
            Json(AnalyzeRequest {
                text: "Wonderful".into(),
                approach: Some(ScoringApproach::Single),
            }),
        )
        .await
        .unwrap();
        assert_eq!(resp.approach, ScoringApproach::Single);

        let (status, _) = api_analyze(
            State(split_state()),
            Json(AnalyzeRequest {
                text: "Wonderful".into(),
                approach: Some(ScoringApproach::Separate),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_blank_form_submit_sets_notice() {
        let state = lexicon_state();
        let id = Uuid::new_v4();
        submit_form(
            State(state.clone()),
            Path(id),
            Form(AnalyzeForm {
                feedback: "   ".into(),
                approach: None,
            }),
        )
        .await;
        let session = state.sessions.write().await.get(&id);
        assert!(session.analysis.is_none());
        assert_eq!(
            session.notice.as_deref(),
            Some("Please enter some feedback to analyze.")
        );
    }

    #[tokio::test]
    async fn test_show_session_renders_page() {
        let state = lexicon_state();
        let Html(html) = show_session(State(state), Path(Uuid::new_v4())).await;
        assert!(html.contains("Emotion Analysis"));
        assert!(html.contains("Top Themes"));
    }

    #[tokio::test]
    async fn test_api_analyze_success() {
        let Json(resp) = api_analyze(
            State(lexicon_state()),
            Json(AnalyzeRequest {
                text: "I love this product, it exceeded all expectations!".into(),
                approach: None,
            }),
        )
        .await
        .unwrap();
        assert!(resp.adore_score >= 0.85);
        assert_eq!(resp.dominant.as_deref(), Some("joy"));
        assert_eq!(resp.radar.len(), 8);
        assert_eq!(resp.themes, ThemeList::default());
    }

    #[tokio::test]
    async fn test_api_analyze_blank_is_bad_request() {
        let (status, Json(body)) = api_analyze(
            State(lexicon_state()),
            Json(AnalyzeRequest {
                text: "".into(),
                approach: None,
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.error.contains("enter some feedback"));
    }

    #[tokio::test]
    async fn test_api_analyze_inference_failure_is_bad_gateway() {
        let state = app_state(Arc::new(DownScorer(vec!["joy".into()])));
        let (status, Json(body)) = api_analyze(
            State(state),
            Json(AnalyzeRequest {
                text: "hello".into(),
                approach: None,
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.error.contains("model unavailable"));
    }

    #[tokio::test]
    async fn test_api_themes() {
        let Json(themes) = api_themes(State(lexicon_state())).await;
        assert_eq!(themes, ThemeList::default());
    }
}
