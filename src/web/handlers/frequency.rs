// GET /api/word-frequency — the ranked word table across every issue.
//
// Always a full recomputation. Per-project query failures still answer 200
// and are listed under `failed_projects`; only an unreadable project
// directory turns into 502.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::pipeline::frequency;
use crate::web::{api_error, AppState};

pub async fn get_word_frequency(State(state): State<AppState>) -> impl IntoResponse {
    match frequency::run(&state.fetcher, &state.identity).await {
        Ok(report) => Json(report).into_response(),
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Word frequency computation failed");
            api_error(
                StatusCode::BAD_GATEWAY,
                "Could not enumerate tracker projects",
            )
        }
    }
}
