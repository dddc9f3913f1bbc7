use std::path::Path;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};

use super::{RouteRecord, RouteSource};
use crate::error::LoadError;

/// Route source reading the `routes` table of a SQLite database.
///
/// The database path changes with every mission config, so each load opens
/// a fresh read-only connection instead of holding a long-lived pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteRouteSource;

impl SqliteRouteSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RouteSource for SqliteRouteSource {
    async fn load_routes(&self, db_path: &Path) -> Result<Vec<RouteRecord>, LoadError> {
        // SQLite reports a missing file as a generic open error; check
        // upfront to keep the "not found" kind distinguishable.
        if !db_path.is_file() {
            return Err(LoadError::RoutesDbNotFound(db_path.to_path_buf()));
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .read_only(true);
        let pool = SqlitePool::connect_with(options).await?;

        let stored: Vec<RouteRecord> =
            sqlx::query_as("SELECT origin, destination, travel_time FROM routes")
                .fetch_all(&pool)
                .await?;
        pool.close().await;

        tracing::debug!(path = %db_path.display(), rows = stored.len(), "routes loaded");

        // Stored routes are navigable both ways: each row yields two
        // directed records.
        let mut records = Vec::with_capacity(stored.len() * 2);
        for record in stored {
            records.push(record.reversed());
            records.push(record);
        }
        Ok(records)
    }
}
