use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use emojifier::GenerationFailure;
use serde_json::json;
use tracing::error;

/// The message shown when a request carries no README content.
pub const EMPTY_CONTENT_MESSAGE: &str = "Please enter some README content to enhance.";

/// A custom error type for the server application.
///
/// This enum encapsulates the kinds of errors a request can end in, so each
/// can be converted into an appropriate HTTP response.
#[derive(Debug)]
pub enum AppError {
    /// The request was rejected before any remote call was made.
    Validation(String),
    /// The generation call failed.
    Generation(GenerationFailure),
    /// The request body could not be read as an `EmojifyRequest`.
    Rejected(JsonRejection),
}

impl From<GenerationFailure> for AppError {
    fn from(err: GenerationFailure) -> Self {
        AppError::Generation(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejected(rejection)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Generation(failure) => {
                error!("GenerationFailure: {:?}", failure);
                (
                    StatusCode::BAD_GATEWAY,
                    format!("Failed to generate content. {}", failure.message()),
                )
            }
            AppError::Rejected(rejection) => (rejection.status(), rejection.body_text()),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status_code, body).into_response()
    }
}
