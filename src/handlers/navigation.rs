use std::path::PathBuf;
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use super::AppError;
use crate::config::EmpireConfig;
use crate::services::AppState;

#[derive(Debug, Deserialize)]
pub struct LoadFalconRequest {
    /// Path to a `millennium-falcon.json` on the server's filesystem.
    pub path: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct OddsResponse {
    pub odds: f64,
}

/// `POST /api/millennium-falcon` — (re)load mission data.
pub async fn load_millennium_falcon(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoadFalconRequest>,
) -> Result<StatusCode, AppError> {
    let mut computer = state.computer.write().await;
    computer.load_millennium_falcon(&request.path).await?;
    Ok(StatusCode::OK)
}

/// `POST /api/empire` — submit empire intelligence (countdown + sightings).
pub async fn load_empire(
    State(state): State<Arc<AppState>>,
    Json(data): Json<EmpireConfig>,
) -> Result<StatusCode, AppError> {
    let mut computer = state.computer.write().await;
    computer.load_empire(&data)?;
    Ok(StatusCode::OK)
}

/// `GET /api/odds` — the current success odds, in percent.
pub async fn get_odds(State(state): State<Arc<AppState>>) -> Json<OddsResponse> {
    let computer = state.computer.read().await;
    Json(OddsResponse {
        odds: computer.compute_odds(),
    })
}
