use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use caravan_solver::error::{DataError, SolveError};
use serde::Serialize;

pub enum ApiError {
    BadRequest(String),
    InternalServerError(String),
    NotFound(String),
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl From<DataError> for ApiError {
    fn from(error: DataError) -> Self {
        ApiError::BadRequest(error.to_string())
    }
}

impl From<SolveError> for ApiError {
    fn from(error: SolveError) -> Self {
        match error {
            SolveError::Data(error) => ApiError::BadRequest(error.to_string()),
            SolveError::Infeasible(error) => ApiError::NotFound(error.to_string()),
            SolveError::Invariant(error) => ApiError::InternalServerError(error.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::InternalServerError(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}
