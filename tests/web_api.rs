// Router tests — drive the Axum app in-process with tower's oneshot.
//
// No sockets: ClientIp falls back to X-Forwarded-For, which the tests set
// to simulate different clients.

#![cfg(feature = "web")]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use rudeshare::board::MemoryStore;
use rudeshare::config::Config;
use rudeshare::web::{build_router, AppState};

fn app() -> Router {
    build_router(AppState {
        store: Arc::new(MemoryStore::new()),
        config: Arc::new(Config::default()),
    })
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, ip: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-forwarded-for", ip)
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = send(&app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn rude_post_is_created() {
    let app = app();
    let (status, body) = send(
        &app,
        post_json(
            "/api/posts",
            "1.1.1.1",
            json!({ "content": "this is fucking garbage and I hate it!!!" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["rudenessScore"], 34);
    assert_eq!(body["isBoosted"], false);
    assert_eq!(body["brutalityPercentage"], 34);
    assert_eq!(body["commentCount"], 0);

    let (status, list) = send(&app, get("/api/posts?sort=popular")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn polite_post_is_forbidden_with_rude_response() {
    let app = app();
    let (status, body) = send(
        &app,
        post_json("/api/posts", "1.1.1.1", json!({ "content": "please thank you" })),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["flaggedTerms"], json!(["please", "thank you"]));
    assert!(body["rudeResponse"].is_string());

    let (_, shame) = send(&app, get("/api/hall-of-shame")).await;
    let shame = shame.as_array().unwrap();
    assert_eq!(shame.len(), 1);
    assert_eq!(shame[0]["content"], "please thank you");
    assert!(shame[0].get("ipHash").is_none());
}

#[tokio::test]
async fn illegal_post_is_forbidden_without_rude_response() {
    let (status, body) = send(
        &app(),
        post_json("/api/posts", "1.1.1.1", json!({ "content": "I will kill you" })),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["flaggedTerms"], json!(["kill"]));
    assert!(body.get("rudeResponse").is_none());
}

#[tokio::test]
async fn empty_post_is_bad_request() {
    let (status, _) = send(
        &app(),
        post_json("/api/posts", "1.1.1.1", json!({ "content": "   " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn second_vote_from_same_ip_conflicts() {
    let app = app();
    send(
        &app,
        post_json("/api/posts", "1.1.1.1", json!({ "content": "this sucks" })),
    )
    .await;

    let vote = || post_json("/api/posts/1/vote", "9.9.9.9", json!({ "voteType": "up" }));
    let (first, _) = send(&app, vote()).await;
    let (second, body) = send(&app, vote()).await;

    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::CONFLICT);
    assert!(body["error"].is_string());

    let (_, post) = send(&app, get("/api/posts/1")).await;
    assert_eq!(post["score"], 1);
}

#[tokio::test]
async fn reacting_twice_removes_the_reaction() {
    let app = app();
    send(
        &app,
        post_json("/api/posts", "1.1.1.1", json!({ "content": "this sucks" })),
    )
    .await;

    let react = || {
        post_json(
            "/api/posts/1/react",
            "9.9.9.9",
            json!({ "reactionType": "middle_finger" }),
        )
    };
    let (added, _) = send(&app, react()).await;
    assert_eq!(added, StatusCode::CREATED);

    let (_, post) = send(&app, get("/api/posts/1")).await;
    assert_eq!(post["reactions"]["middle_finger"], 1);
    // 10 rudeness + 15 middle finger
    assert_eq!(post["brutalityPercentage"], 25);

    let (removed, body) = send(&app, react()).await;
    assert_eq!(removed, StatusCode::OK);
    assert_eq!(body["reactionType"], "middle_finger");
}

#[tokio::test]
async fn actions_on_missing_post_are_not_found() {
    let app = app();
    let (status, _) = send(
        &app,
        post_json("/api/posts/42/vote", "1.1.1.1", json!({ "voteType": "down" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        post_json("/api/posts/42/comments", "1.1.1.1", json!({ "content": "lame" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        post_json("/api/posts/42/react", "1.1.1.1", json!({ "reactionType": "savage" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &app,
        post_json("/api/posts/42/report", "1.1.1.1", json!({ "reason": "meh" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Post not found");

    let (status, _) = send(&app, get("/api/posts/42")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn voting_on_missing_comment_is_not_found() {
    let app = app();
    let (status, body) = send(
        &app,
        post_json("/api/comments/999/vote", "1.1.1.1", json!({ "voteType": "up" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Comment not found");

    // Nothing was stored, so the voter doesn't count as active
    let (_, stats) = send(&app, get("/api/statistics")).await;
    assert_eq!(stats["activeUsers"], 0);
}

#[tokio::test]
async fn comments_round_trip() {
    let app = app();
    send(
        &app,
        post_json("/api/posts", "1.1.1.1", json!({ "content": "this sucks" })),
    )
    .await;

    let (status, comment) = send(
        &app,
        post_json("/api/posts/1/comments", "2.2.2.2", json!({ "content": "lame" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(comment["rudenessScore"], 5);

    let (status, body) = send(
        &app,
        post_json(
            "/api/posts/1/comments",
            "2.2.2.2",
            json!({ "content": "sorry, best wishes" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body["error"].as_str().unwrap().starts_with("Comment banned"));

    let (status, vote) = send(
        &app,
        post_json("/api/comments/1/vote", "3.3.3.3", json!({ "voteType": "down" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(vote["voteType"], "down");

    let (_, comments) = send(&app, get("/api/posts/1/comments?sort=oldest")).await;
    let comments = comments.as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["score"], -1);
}

#[tokio::test]
async fn search_requires_a_query() {
    let app = app();
    let (status, _) = send(&app, get("/api/posts/search")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    send(
        &app,
        post_json("/api/posts", "1.1.1.1", json!({ "content": "this sucks" })),
    )
    .await;
    let (status, hits) = send(&app, get("/api/posts/search?q=SUCKS")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hits.as_array().unwrap().len(), 1);

    // Untrimmed, " sucks " would miss the word at the end of the post
    let (status, hits) = send(&app, get("/api/posts/search?q=%20sucks%20")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hits.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn moderate_endpoint_is_a_dry_run() {
    let app = app();
    let (status, body) = send(
        &app,
        post_json("/api/moderate", "1.1.1.1", json!({ "content": "please thank you" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["verdict"]["severity"], "banned_polite");
    assert_eq!(body["tier"], "None");

    let (_, shame) = send(&app, get("/api/hall-of-shame")).await;
    assert!(shame.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn daily_challenge_and_statistics() {
    let app = app();
    let (status, challenge) = send(&app, get("/api/daily-challenge")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(rudeshare::challenge::BRUTAL_CHALLENGES
        .contains(&challenge["prompt"].as_str().unwrap()));
    assert_eq!(challenge["responseCount"], 0);

    send(
        &app,
        post_json(
            "/api/posts",
            "1.1.1.1",
            json!({ "content": "my worst habit is being a moron", "challengeResponse": true }),
        ),
    )
    .await;

    let (_, challenge) = send(&app, get("/api/daily-challenge")).await;
    assert_eq!(challenge["responseCount"], 1);

    let (status, stats) = send(&app, get("/api/statistics")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["totalPosts"], 1);
    assert_eq!(stats["avgRudenessScore"], 5);
}

#[tokio::test]
async fn cleanup_keeps_fresh_posts() {
    let app = app();
    send(
        &app,
        post_json("/api/posts", "1.1.1.1", json!({ "content": "this sucks" })),
    )
    .await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/cleanup")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], 0);
}

#[tokio::test]
async fn server_reports_which_address_failed_to_bind() {
    let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = taken.local_addr().unwrap().port();

    let config = Config {
        bind: "127.0.0.1".to_string(),
        port,
        ..Config::default()
    };
    let err = rudeshare::web::run_server(config, Arc::new(MemoryStore::new()))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), format!("failed to bind 127.0.0.1:{port}"));
}
