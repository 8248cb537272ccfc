use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::store::DirectoryError;

/// Error payload shape: `{"detail": "..."}`.
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        let status = match self {
            DirectoryError::ActivityNotFound => StatusCode::NOT_FOUND,
            DirectoryError::AlreadySignedUp { .. } | DirectoryError::NotSignedUp { .. } => {
                StatusCode::BAD_REQUEST
            }
        };
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
