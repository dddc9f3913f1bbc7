use std::path::PathBuf;

use thiserror::Error;

use crate::models::RouteError;

/// Failures of the two load operations.
///
/// Each kind stays distinguishable at the call boundary: a caller can tell
/// a rejected config from an unreadable file from a broken backing store.
/// The odds computation itself never fails.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid route: {0}")]
    InvalidRoute(#[from] RouteError),

    #[error("invalid mission config: {0}")]
    InvalidMissionConfig(String),

    #[error("countdown must be positive, got {0}")]
    InvalidCountdown(i64),

    #[error("routes database not found: {}", .0.display())]
    RoutesDbNotFound(PathBuf),

    #[error("failed to read config file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("routes database error")]
    Database(#[from] sqlx::Error),
}
