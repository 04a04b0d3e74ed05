use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use moneymapp_core::errors::{Error as CoreError, SimulationError};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Core(e) => match e {
                CoreError::Simulation(
                    SimulationError::NonConvergence { .. } | SimulationError::GoalNotReached { .. },
                ) => StatusCode::UNPROCESSABLE_ENTITY,
                CoreError::Simulation(SimulationError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
                CoreError::Validation(_) => StatusCode::BAD_REQUEST,
            },
        };
        tracing::debug!("Request rejected ({}): {}", status.as_u16(), self);
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
