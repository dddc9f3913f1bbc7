use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Server settings, environment-driven.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Mission config to preload at startup, when provided.
    pub falcon_config: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Config {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid PORT value: {e}"))?,

            falcon_config: env::var("FALCON_CONFIG").ok().map(PathBuf::from),
        })
    }
}

/// Contents of a `millennium-falcon.json` mission config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MillenniumFalconConfig {
    pub autonomy: i64,
    pub departure: String,
    pub arrival: String,
    pub routes_db: String,
}

impl MillenniumFalconConfig {
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        read_json(path)
    }

    /// Resolves the routes database reference. Relative paths are anchored
    /// at the config file's own directory.
    pub fn resolve_routes_db(&self, config_path: &Path) -> PathBuf {
        let db = Path::new(&self.routes_db);
        if db.is_absolute() {
            db.to_path_buf()
        } else {
            config_path
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join(db)
        }
    }
}

/// Contents of an `empire.json` intelligence report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmpireConfig {
    pub countdown: i64,
    #[serde(default)]
    pub bounty_hunters: Vec<BountyHunterSighting>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BountyHunterSighting {
    pub planet: String,
    pub day: i64,
}

impl EmpireConfig {
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        read_json(path)
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}
