pub mod routes_db;

use std::path::Path;

use async_trait::async_trait;

use crate::error::LoadError;

pub use routes_db::SqliteRouteSource;

/// A raw directed route record as supplied by a backing store.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct RouteRecord {
    pub origin: String,
    pub destination: String,
    pub travel_time: i64,
}

impl RouteRecord {
    /// The same route traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            origin: self.destination.clone(),
            destination: self.origin.clone(),
            travel_time: self.travel_time,
        }
    }
}

/// Source of the raw route collection referenced by a mission config.
///
/// The contract is in directed records: a source backed by a bidirectional
/// store expands each stored row itself.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RouteSource: Send + Sync {
    async fn load_routes(&self, db_path: &Path) -> Result<Vec<RouteRecord>, LoadError>;
}
