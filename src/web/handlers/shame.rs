// GET /api/hall-of-shame — recent too-polite rejections, newest first.
//
// Optional ?limit= parameter (default 20, max 100). IP hashes are stripped
// from the public listing.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::web::{api_error, AppState};

#[derive(Deserialize, Default)]
pub struct ShameQuery {
    pub limit: Option<usize>,
}

pub async fn hall_of_shame(
    State(state): State<AppState>,
    Query(params): Query<ShameQuery>,
) -> Response {
    let limit = params.limit.unwrap_or(20).min(100);
    let entries = match state.store.hall_of_shame(limit).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load hall of shame");
            return api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to get hall of shame",
            );
        }
    };

    let entries: Vec<serde_json::Value> = entries
        .into_iter()
        .map(|e| {
            serde_json::json!({
                "id": e.id,
                "content": e.content,
                "flaggedTerms": e.flagged_terms,
                "rudeResponse": e.rude_response,
                "createdAt": e.created_at,
            })
        })
        .collect();

    Json(entries).into_response()
}
