// GET /api/daily-challenge — today's brutal challenge and its response count.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::web::{api_error, AppState};

pub async fn daily_challenge(State(state): State<AppState>) -> Response {
    match state.store.todays_challenge().await {
        Ok(challenge) => Json(challenge).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load daily challenge");
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to get daily challenge",
            )
        }
    }
}
