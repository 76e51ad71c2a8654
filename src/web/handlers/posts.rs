// Post handlers.
//
// GET  /api/posts              — all posts, ?sort=newest|oldest|popular|controversial
// GET  /api/posts/search?q=    — case-insensitive substring search
// GET  /api/posts/{id}         — single post
// POST /api/posts              — moderated submission
// POST /api/posts/{id}/vote    — one vote per IP per post
// POST /api/posts/{id}/react   — toggles a reaction
// POST /api/posts/{id}/report  — report a post

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::board::models::{NewPost, PostSort, ReactionToggle, ReactionType, VoteType};
use crate::board::submission;
use crate::web::{api_error, rejection_response, store_error, AppState, ClientIp};

#[derive(Deserialize, Default)]
pub struct ListQuery {
    #[serde(default)]
    pub sort: PostSort,
}

#[derive(Deserialize, Default)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteBody {
    pub vote_type: VoteType,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactBody {
    pub reaction_type: ReactionType,
}

#[derive(Deserialize, Default)]
pub struct ReportBody {
    pub reason: Option<String>,
}

pub async fn list_posts(State(state): State<AppState>, Query(params): Query<ListQuery>) -> Response {
    match state.store.list_posts(params.sort).await {
        Ok(posts) => Json(posts).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list posts");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch posts")
        }
    }
}

pub async fn search_posts(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Response {
    let query = params.q.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return api_error(StatusCode::BAD_REQUEST, "Search query is required");
    }

    match state.store.search_posts(query).await {
        Ok(posts) => Json(posts).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to search posts");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to search posts")
        }
    }
}

pub async fn get_post(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    match state.store.get_post(id).await {
        Ok(Some(post)) => Json(post).into_response(),
        Ok(None) => api_error(StatusCode::NOT_FOUND, "Post not found"),
        Err(e) => {
            tracing::error!(error = %e, id, "Failed to fetch post");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch post")
        }
    }
}

pub async fn create_post(
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
    Json(body): Json<NewPost>,
) -> Response {
    let limits = state.config.limits();
    match submission::submit_post(state.store.as_ref(), body, &ip, &limits).await {
        Ok(Ok(post)) => (StatusCode::CREATED, Json(post)).into_response(),
        Ok(Err(rejection)) => rejection_response(&rejection, "Post"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to create post");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to create post")
        }
    }
}

pub async fn vote(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    ClientIp(ip): ClientIp,
    Json(body): Json<VoteBody>,
) -> Response {
    match state.store.create_vote(id, body.vote_type, &ip).await {
        Ok(Some(vote)) => (StatusCode::CREATED, Json(vote)).into_response(),
        Ok(None) => api_error(StatusCode::CONFLICT, "You have already voted on this post"),
        Err(e) => store_error(e, "Failed to record vote"),
    }
}

pub async fn react(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    ClientIp(ip): ClientIp,
    Json(body): Json<ReactBody>,
) -> Response {
    match state.store.toggle_reaction(id, body.reaction_type, &ip).await {
        Ok(ReactionToggle::Added(reaction)) => (StatusCode::CREATED, Json(reaction)).into_response(),
        Ok(ReactionToggle::Removed(reaction_type)) => Json(serde_json::json!({
            "message": "Reaction removed",
            "reactionType": reaction_type,
        }))
        .into_response(),
        Err(e) => store_error(e, "Failed to record reaction"),
    }
}

pub async fn report(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    ClientIp(ip): ClientIp,
    Json(body): Json<ReportBody>,
) -> Response {
    match state.store.create_report(id, body.reason, &ip).await {
        Ok(_) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "message": "Post reported successfully" })),
        )
            .into_response(),
        Err(e) => store_error(e, "Failed to report post"),
    }
}

/// 404 (or 500) response if the post doesn't exist, `None` if it does.
///
/// Only a pre-check so that nothing is moderated or logged for a missing
/// post; the store re-checks under its own lock when it writes.
pub(crate) async fn require_post(state: &AppState, id: u64) -> Option<Response> {
    match state.store.get_post(id).await {
        Ok(Some(_)) => None,
        Ok(None) => Some(api_error(StatusCode::NOT_FOUND, "Post not found")),
        Err(e) => {
            tracing::error!(error = %e, id, "Failed to look up post");
            Some(api_error(StatusCode::INTERNAL_SERVER_ERROR, "Database error"))
        }
    }
}
