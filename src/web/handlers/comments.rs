// Comment handlers.
//
// GET  /api/posts/{id}/comments — ?sort=newest|oldest|popular
// POST /api/posts/{id}/comments — moderated submission
// POST /api/comments/{id}/vote  — one vote per IP per comment

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use super::posts::{require_post, VoteBody};
use crate::board::models::{CommentSort, NewComment};
use crate::board::submission;
use crate::web::{api_error, rejection_response, store_error, AppState, ClientIp};

#[derive(Deserialize, Default)]
pub struct CommentsQuery {
    #[serde(default)]
    pub sort: CommentSort,
}

#[derive(Deserialize)]
pub struct CommentBody {
    pub content: String,
}

pub async fn list_comments(
    State(state): State<AppState>,
    Path(post_id): Path<u64>,
    Query(params): Query<CommentsQuery>,
) -> Response {
    match state.store.list_comments(post_id, params.sort).await {
        Ok(comments) => Json(comments).into_response(),
        Err(e) => {
            tracing::error!(error = %e, post_id, "Failed to list comments");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch comments")
        }
    }
}

pub async fn create_comment(
    State(state): State<AppState>,
    Path(post_id): Path<u64>,
    ClientIp(ip): ClientIp,
    Json(body): Json<CommentBody>,
) -> Response {
    if let Some(missing) = require_post(&state, post_id).await {
        return missing;
    }

    let comment = NewComment {
        post_id,
        content: body.content,
    };
    let limits = state.config.limits();
    match submission::submit_comment(state.store.as_ref(), comment, &ip, &limits).await {
        Ok(Ok(comment)) => (StatusCode::CREATED, Json(comment)).into_response(),
        Ok(Err(rejection)) => rejection_response(&rejection, "Comment"),
        Err(e) => store_error(e, "Failed to create comment"),
    }
}

pub async fn vote(
    State(state): State<AppState>,
    Path(comment_id): Path<u64>,
    ClientIp(ip): ClientIp,
    Json(body): Json<VoteBody>,
) -> Response {
    match state
        .store
        .create_comment_vote(comment_id, body.vote_type, &ip)
        .await
    {
        Ok(Some(vote)) => (StatusCode::CREATED, Json(vote)).into_response(),
        Ok(None) => api_error(
            StatusCode::CONFLICT,
            "You have already voted on this comment",
        ),
        Err(e) => store_error(e, "Failed to record vote"),
    }
}
