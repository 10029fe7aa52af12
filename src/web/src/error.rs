use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pitchside_core::{ClubStateError, TacticError};
use database::StoreError;
use log::error;
use serde_json::json;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Forbidden(String),
    NotFound(String),
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Forbidden(message) => (StatusCode::FORBIDDEN, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::InternalError(message) => {
                error!("internal error: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<TacticError> for ApiError {
    fn from(err: TacticError) -> Self {
        match err {
            TacticError::Validation(message) => ApiError::BadRequest(message),
            TacticError::MalformedData(message) => {
                ApiError::BadRequest(format!("malformed tactic data: {}", message))
            }
            TacticError::Persistence(message) => ApiError::InternalError(message),
        }
    }
}

impl From<ClubStateError> for ApiError {
    fn from(err: ClubStateError) -> Self {
        match err {
            ClubStateError::Validation(message) => ApiError::BadRequest(message),
            ClubStateError::NotFound(message) => ApiError::NotFound(message),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::InternalError(err.to_string())
    }
}
