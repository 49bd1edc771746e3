// JSON error bodies for failed API calls
use crate::application::error::ServiceError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

pub fn status_for(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::Repository { .. } if err.is_not_found() => StatusCode::NOT_FOUND,
        ServiceError::Repository { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        ServiceError::Collaborator { .. } => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(error = %self, "Request rejected");
        }

        let body = ErrorResponse {
            error: status.to_string(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
