pub mod health;
pub mod navigation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::LoadError;

/// Maps rejected loads onto the HTTP boundary.
///
/// Every load failure is a problem with the submitted data or the files it
/// points at, so they all surface as 422 with the error kind spelled out.
pub struct AppError(pub LoadError);

impl From<LoadError> for AppError {
    fn from(err: LoadError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self.0, "load rejected");
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "error": self.0.to_string()
            })),
        )
            .into_response()
    }
}
