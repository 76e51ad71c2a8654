// Web server — Axum JSON API for the board.
//
// All routes live under /api except the health check. Submissions go through
// `board::submission`, so every post and comment is moderated before it is
// stored. There is no auth: the client IP (hashed by the store) is the only
// identity.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::board::submission::Rejection;
use crate::board::{BoardStore, NotFound};
use crate::config::Config;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BoardStore>,
    pub config: Arc<Config>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(config: Config, store: Arc<dyn BoardStore>) -> Result<()> {
    let addr = format!("{}:{}", config.bind, config.port);
    let state = AppState {
        store,
        config: Arc::new(config),
    };

    let app = build_router(state);

    info!("RudeShare listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/api/posts",
            get(handlers::posts::list_posts).post(handlers::posts::create_post),
        )
        .route("/api/posts/search", get(handlers::posts::search_posts))
        .route("/api/posts/{id}", get(handlers::posts::get_post))
        .route("/api/posts/{id}/vote", post(handlers::posts::vote))
        .route("/api/posts/{id}/react", post(handlers::posts::react))
        .route("/api/posts/{id}/report", post(handlers::posts::report))
        .route(
            "/api/posts/{id}/comments",
            get(handlers::comments::list_comments).post(handlers::comments::create_comment),
        )
        .route("/api/comments/{id}/vote", post(handlers::comments::vote))
        .route("/api/moderate", post(handlers::moderation::moderate))
        .route("/api/hall-of-shame", get(handlers::shame::hall_of_shame))
        .route(
            "/api/daily-challenge",
            get(handlers::challenge::daily_challenge),
        )
        .route("/api/statistics", get(handlers::stats::statistics))
        .route("/api/cleanup", post(handlers::stats::cleanup));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check — always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}

/// Map a store error to a response: 404 for a missing post or comment,
/// otherwise log it and answer 500 with `message`.
pub fn store_error(error: anyhow::Error, message: &str) -> Response {
    if let Some(missing) = error.downcast_ref::<NotFound>() {
        return api_error(StatusCode::NOT_FOUND, &missing.to_string());
    }
    tracing::error!(error = %error, "{message}");
    api_error(StatusCode::INTERNAL_SERVER_ERROR, message)
}

/// Map a moderation rejection to its HTTP response.
///
/// `kind` names the thing being submitted ("Post", "Comment") in messages.
pub fn rejection_response(rejection: &Rejection, kind: &str) -> Response {
    let message = rejection.message(kind);
    match rejection {
        Rejection::Invalid(_) => api_error(StatusCode::BAD_REQUEST, &message),
        Rejection::Illegal { flagged_terms } => (
            StatusCode::FORBIDDEN,
            axum::Json(serde_json::json!({
                "error": message,
                "flaggedTerms": flagged_terms,
            })),
        )
            .into_response(),
        Rejection::TooPolite {
            flagged_terms,
            rude_response,
        } => (
            StatusCode::FORBIDDEN,
            axum::Json(serde_json::json!({
                "error": message,
                "flaggedTerms": flagged_terms,
                "rudeResponse": rude_response,
            })),
        )
            .into_response(),
    }
}

/// The requesting client's IP address.
///
/// Prefers the first `X-Forwarded-For` entry (the board usually sits behind
/// a proxy), then the socket peer address, then loopback.
#[derive(Debug, Clone)]
pub struct ClientIp(pub String);

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let forwarded = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty());

        if let Some(ip) = forwarded {
            return Ok(ClientIp(ip.to_string()));
        }

        let ip = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string())
            .unwrap_or_else(|| "127.0.0.1".to_string());
        Ok(ClientIp(ip))
    }
}
