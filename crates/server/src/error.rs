use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use store::StoreError;
use thiserror::Error;

/// API-facing failure. Responses carry a human-readable `message` only —
/// no stack traces, no internal paths.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Missing data")]
    MissingData,

    #[error("Not found")]
    NotFound,

    #[error("Internal error")]
    Internal,
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MissingData => ApiError::MissingData,
            StoreError::NotFound => ApiError::NotFound,
            StoreError::Storage(_) | StoreError::Encode(_) => {
                tracing::error!("storage failure: {err}");
                ApiError::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MissingData => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}
