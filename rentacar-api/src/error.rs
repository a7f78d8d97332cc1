use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rentacar_shared::ValidationError;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    JsonRejection(JsonRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::UNPROCESSABLE_ENTITY, "validation", msg),
            // 422 for bad data, 400 for bad syntax, 415 for a missing content type
            AppError::JsonRejection(rejection) => {
                (rejection.status(), "json body", rejection.body_text())
            }
        };
        // The message can echo customer data, so only the status is logged
        tracing::debug!("Rejected request ({}): {} error", status, kind);

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::JsonRejection(rejection)
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::ValidationError(err.to_string())
    }
}
