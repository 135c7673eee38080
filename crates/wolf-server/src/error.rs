use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use wolf_core::ScoringError;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    /// The round no longer accepts this operation.
    Conflict(String),
    Internal(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadRequest(m) | Self::NotFound(m) | Self::Conflict(m) | Self::Internal(m) => {
                write!(f, "{m}")
            },
        }
    }
}

impl From<ScoringError> for AppError {
    fn from(e: ScoringError) -> Self {
        Self::BadRequest(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
            Self::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
            Self::Conflict(m) => (StatusCode::CONFLICT, m.clone()),
            Self::Internal(m) => {
                tracing::error!(error = %m, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, m.clone())
            },
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
