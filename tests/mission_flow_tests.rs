//! Full mission flows: config files + SQLite universe + service + HTTP API.

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

use navicomputer::config::EmpireConfig;
use navicomputer::create_router;
use navicomputer::repository::SqliteRouteSource;
use navicomputer::services::{AppState, OnboardComputer};

async fn create_universe_db(path: &Path, routes: &[(&str, &str, i64)]) {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await.unwrap();

    sqlx::query(
        "CREATE TABLE routes (origin TEXT NOT NULL, destination TEXT NOT NULL, travel_time INTEGER NOT NULL)",
    )
    .execute(&pool)
    .await
    .unwrap();

    for &(origin, destination, travel_time) in routes {
        sqlx::query("INSERT INTO routes (origin, destination, travel_time) VALUES (?1, ?2, ?3)")
            .bind(origin)
            .bind(destination)
            .bind(travel_time)
            .execute(&pool)
            .await
            .unwrap();
    }
    pool.close().await;
}

/// Writes the classic mission fixture: universe.db next to a config that
/// references it relatively.
async fn tatooine_fixture() -> (TempDir, std::path::PathBuf) {
    let dir = tempdir().unwrap();
    create_universe_db(
        &dir.path().join("universe.db"),
        &[
            ("Tatooine", "Dagobah", 6),
            ("Dagobah", "Endor", 4),
            ("Dagobah", "Hoth", 1),
            ("Hoth", "Endor", 1),
            ("Tatooine", "Hoth", 6),
        ],
    )
    .await;

    let falcon_path = dir.path().join("millennium-falcon.json");
    std::fs::write(
        &falcon_path,
        r#"{"autonomy": 6, "departure": "Tatooine", "arrival": "Endor", "routes_db": "universe.db"}"#,
    )
    .unwrap();

    (dir, falcon_path)
}

fn hoth_empire(countdown: i64) -> EmpireConfig {
    serde_json::from_value(json!({
        "countdown": countdown,
        "bounty_hunters": [
            {"planet": "Hoth", "day": 6},
            {"planet": "Hoth", "day": 7},
            {"planet": "Hoth", "day": 8}
        ]
    }))
    .unwrap()
}

#[tokio::test]
async fn service_flow_computes_the_classic_missions() {
    let (_dir, falcon_path) = tatooine_fixture().await;

    for (countdown, expected) in [(7, 0.0), (8, 81.0), (9, 90.0), (10, 100.0)] {
        let mut computer = OnboardComputer::new(SqliteRouteSource::new());
        computer.load_millennium_falcon(&falcon_path).await.unwrap();
        computer.load_empire(&hoth_empire(countdown)).unwrap();

        let odds = computer.compute_odds();
        assert!(
            (odds - expected).abs() < 1e-9,
            "countdown {countdown}: expected {expected}, got {odds}"
        );
    }
}

#[tokio::test]
async fn reloading_mission_data_replaces_the_galaxy() {
    let (_dir, falcon_path) = tatooine_fixture().await;

    let other = tempdir().unwrap();
    create_universe_db(&other.path().join("universe.db"), &[("Endor", "Coruscant", 1)]).await;
    let other_falcon = other.path().join("millennium-falcon.json");
    std::fs::write(
        &other_falcon,
        r#"{"autonomy": 1, "departure": "Endor", "arrival": "Coruscant", "routes_db": "universe.db"}"#,
    )
    .unwrap();

    let mut computer = OnboardComputer::new(SqliteRouteSource::new());
    computer.load_millennium_falcon(&falcon_path).await.unwrap();
    computer.load_millennium_falcon(&other_falcon).await.unwrap();

    assert!(computer.galaxy().contains("Coruscant"));
    assert!(!computer.galaxy().contains("Tatooine"));
}

fn router_over_fresh_state() -> axum::Router {
    let computer = OnboardComputer::new(SqliteRouteSource::new());
    create_router(Arc::new(AppState::new(computer)))
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn api_round_trip_reports_the_odds() {
    let (_dir, falcon_path) = tatooine_fixture().await;
    let app = router_over_fresh_state();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/millennium-falcon",
            json!({"path": falcon_path.to_str().unwrap()}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/empire",
            serde_json::to_value(hoth_empire(8)).unwrap(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/odds")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert!((body["odds"].as_f64().unwrap() - 81.0).abs() < 1e-9);
}

#[tokio::test]
async fn api_rejects_a_non_positive_countdown() {
    let app = router_over_fresh_state();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/empire",
            json!({"countdown": 0, "bounty_hunters": []}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("countdown"));
}

#[tokio::test]
async fn api_rejects_an_unreadable_mission_config() {
    let app = router_over_fresh_state();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/millennium-falcon",
            json!({"path": "/nonexistent/millennium-falcon.json"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn odds_endpoint_answers_before_any_load() {
    let app = router_over_fresh_state();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/odds")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["odds"].as_f64().unwrap(), 0.0);
}

#[tokio::test]
async fn health_endpoint_is_up() {
    let app = router_over_fresh_state();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
