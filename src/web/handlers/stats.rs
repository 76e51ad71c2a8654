// Board-wide maintenance and counters.
//
// GET  /api/statistics — post/comment totals, active users, average rudeness
// POST /api/cleanup    — drop unvoted posts past the retention window

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::web::{api_error, AppState};

pub async fn statistics(State(state): State<AppState>) -> Response {
    match state.store.statistics().await {
        Ok(stats) => Json(stats).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to compute statistics");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch statistics")
        }
    }
}

pub async fn cleanup(State(state): State<AppState>) -> Response {
    match state.store.cleanup_old_posts(state.config.retention()).await {
        Ok(deleted) => Json(serde_json::json!({
            "message": format!("Cleaned up {deleted} old posts"),
            "deleted": deleted,
        }))
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Cleanup failed");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to cleanup posts")
        }
    }
}
