// GET /api/projects — the project directory as the pipeline sees it.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::web::{api_error, AppState};

pub async fn list_projects(State(state): State<AppState>) -> impl IntoResponse {
    match state.fetcher.projects().await {
        Ok(projects) => Json(serde_json::json!({ "projects": projects })).into_response(),
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Project listing failed");
            api_error(
                StatusCode::BAD_GATEWAY,
                "Could not enumerate tracker projects",
            )
        }
    }
}
