#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use animelist_api::config::{LogFormat, ServerConfig};
use animelist_api::router::build_app_router;
use animelist_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: String::new(),
        db_max_connections: 5,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router (same middleware stack as production)
/// on top of the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Insert a series and return its id.
pub async fn insert_series(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO series (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Insert an episode and return its id.
pub async fn insert_episode(pool: &PgPool, series_id: i64, title: &str, number: i32) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO episodes (series_id, title, episode_number) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(series_id)
    .bind(title)
    .bind(number)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Insert a video source for an episode and return its id.
pub async fn insert_video(pool: &PgPool, episode_id: i64, server_name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO episode_videos (episode_id, server_name, url) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(episode_id)
    .bind(server_name)
    .bind(format!("https://cdn.example/{episode_id}/{server_name}.mp4"))
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Episodes "Ep1".."Ep20" numbered 1..20 in series "Naruto", ids in
/// insertion order.
pub async fn seed_naruto(pool: &PgPool) -> Vec<i64> {
    let series_id = insert_series(pool, "Naruto").await;
    let mut ids = Vec::new();
    for n in 1..=20 {
        ids.push(insert_episode(pool, series_id, &format!("Ep{n}"), n).await);
    }
    ids
}
