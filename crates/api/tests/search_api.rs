//! HTTP-level integration tests for `GET /search`.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_track, delete, get, post_json};
use sqlx::PgPool;

fn titles(json: &serde_json::Value, key: &str) -> Vec<String> {
    json["data"][key]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["title"].as_str().unwrap().to_string())
        .collect()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_matches_tracks_and_playlists(pool: PgPool) {
    create_track(common::build_test_app(pool.clone()), "Blue Monday", "http://h/1.mp3").await;
    create_track(common::build_test_app(pool.clone()), "Red Rain", "http://h/2.mp3").await;
    post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/playlists",
        serde_json::json!({"title": "Feeling BLUE", "album_cover": "c.png"}),
    )
    .await;

    let response = get(common::build_test_app(pool), "/api/v1/search?query=blue").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(titles(&json, "tracks"), vec!["Blue Monday"]);
    assert_eq!(titles(&json, "playlists"), vec!["Feeling BLUE"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_without_matches_returns_empty_lists(pool: PgPool) {
    create_track(common::build_test_app(pool.clone()), "Blue Monday", "http://h/1.mp3").await;

    let response = get(common::build_test_app(pool), "/api/v1/search?query=jazz").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["tracks"], serde_json::json!([]));
    assert_eq!(json["data"]["playlists"], serde_json::json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_skips_deleted_tracks(pool: PgPool) {
    let id = create_track(common::build_test_app(pool.clone()), "Blue Monday", "http://h/1.mp3").await;
    delete(common::build_test_app(pool.clone()), &format!("/api/v1/tracks/{id}")).await;

    let response = get(common::build_test_app(pool), "/api/v1/search?query=blue").await;
    let json = body_json(response).await;
    assert!(titles(&json, "tracks").is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_accepts_patterns(pool: PgPool) {
    create_track(common::build_test_app(pool.clone()), "Blue Monday", "http://h/1.mp3").await;
    create_track(common::build_test_app(pool.clone()), "Monday Blues", "http://h/2.mp3").await;

    let response = get(common::build_test_app(pool), "/api/v1/search?query=%5Eblue").await;
    let json = body_json(response).await;
    assert_eq!(titles(&json, "tracks"), vec!["Blue Monday"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_query_returns_400(pool: PgPool) {
    let response = get(common::build_test_app(pool.clone()), "/api/v1/search?query=").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get(common::build_test_app(pool), "/api/v1/search").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_pattern_returns_400(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/search?query=%28unclosed").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_ARGUMENT");
}
