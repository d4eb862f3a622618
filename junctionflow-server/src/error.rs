use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use junctionflow_core::{Error as RoutingError, JunctionId};
use thiserror::Error;

use crate::config::ConfigError;

/// Request failure, mapped to a JSON error body
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Routing(#[from] RoutingError),
    #[error("Junction {0} not found")]
    JunctionNotFound(JunctionId),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Routing(error) => match error {
                RoutingError::InvalidWeight { .. } => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "invalid_weight")
                }
                RoutingError::InvalidMultiplier(_) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "invalid_multiplier")
                }
                RoutingError::RoadNotFound { .. } => (StatusCode::NOT_FOUND, "road_not_found"),
                RoutingError::UnknownJunction(_) => (StatusCode::NOT_FOUND, "unknown_junction"),
                RoutingError::NoRoute { .. } => (StatusCode::NOT_FOUND, "no_route"),
                RoutingError::IoError(_)
                | RoutingError::JsonError(_)
                | RoutingError::InvalidData(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
            },
            AppError::JunctionNotFound(_) => (StatusCode::NOT_FOUND, "junction_not_found"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(%code, "{self}");
        } else {
            tracing::debug!(%code, "{self}");
        }

        let body = serde_json::json!({
            "error": {
                "code": code,
                "message": self.to_string(),
            }
        });
        (status, Json(body)).into_response()
    }
}

/// Failure of a command line invocation
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to load road network: {0}")]
    Model(RoutingError),
    #[error(transparent)]
    Routing(#[from] RoutingError),
    #[error("Unknown junction '{0}'")]
    UnknownName(String),
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}
