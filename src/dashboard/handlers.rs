use super::session::AppState;
use crate::report::page::render_page;
use crate::report::types::SearchRow;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

impl SearchParams {
    fn query(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub total_count: usize,
    pub results: Vec<SearchRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_dashboard))
        .route("/api/search", get(handle_search))
        .route("/health", get(handle_health))
        .with_state(state)
}

pub async fn handle_dashboard(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    let query = params.query();
    let mut session = state.session.lock().await;
    let report = session.render(query).await;
    tracing::debug!(
        "Rendered dashboard (halted={}, query={:?})",
        report.halted,
        query
    );
    Html(render_page(&report, query))
}

pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> (StatusCode, Json<SearchResponse>) {
    let query = params.query().to_string();
    let update = match state.session.lock().await.search(&query).await {
        Ok(update) => update,
        Err(e) => {
            tracing::warn!("Search {:?} rejected, store unavailable: {}", query, e);
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(SearchResponse {
                    query,
                    total_count: 0,
                    results: Vec::new(),
                    error: Some(format!("Gagal koneksi MongoDB: {}", e)),
                }),
            );
        }
    };

    let (total_count, results) = match update.results {
        Some(results) => (results.total_count, results.rows),
        None => (0, Vec::new()),
    };

    (
        StatusCode::OK,
        Json(SearchResponse {
            query,
            total_count,
            results,
            error: None,
        }),
    )
}

pub async fn handle_health() -> &'static str {
    "ok"
}
