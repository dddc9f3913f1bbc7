//! SQLite route source behavior.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use tempfile::tempdir;

use navicomputer::error::LoadError;
use navicomputer::repository::{RouteSource, SqliteRouteSource};

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

#[tokio::test]
async fn every_stored_row_yields_both_directions() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("universe.db");
    create_universe_db(&db_path, &[("Tatooine", "Dagobah", 6), ("Dagobah", "Endor", 4)]).await;

    let records = SqliteRouteSource::new().load_routes(&db_path).await.unwrap();
    assert_eq!(records.len(), 4);

    let has = |origin: &str, destination: &str, travel_time: i64| {
        records.iter().any(|r| {
            r.origin == origin && r.destination == destination && r.travel_time == travel_time
        })
    };
    assert!(has("Tatooine", "Dagobah", 6));
    assert!(has("Dagobah", "Tatooine", 6));
    assert!(has("Dagobah", "Endor", 4));
    assert!(has("Endor", "Dagobah", 4));
}

#[tokio::test]
async fn missing_database_file_is_reported_as_not_found() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("nope.db");

    let result = SqliteRouteSource::new().load_routes(&db_path).await;
    assert!(matches!(result, Err(LoadError::RoutesDbNotFound(_))));
}

#[tokio::test]
async fn database_without_a_routes_table_is_a_database_error() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("empty.db");
    // Create a valid but empty database.
    let options = SqliteConnectOptions::new()
        .filename(&db_path)
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await.unwrap();
    sqlx::query("CREATE TABLE other (x INTEGER)")
        .execute(&pool)
        .await
        .unwrap();
    pool.close().await;

    let result = SqliteRouteSource::new().load_routes(&db_path).await;
    assert!(matches!(result, Err(LoadError::Database(_))));
}

#[tokio::test]
async fn empty_routes_table_loads_as_no_records() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("universe.db");
    create_universe_db(&db_path, &[]).await;

    let records = SqliteRouteSource::new().load_routes(&db_path).await.unwrap();
    assert!(records.is_empty());
}
