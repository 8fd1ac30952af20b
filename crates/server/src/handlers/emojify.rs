//! # Emojify Handler
//!
//! Validates the README fragment, runs it through the generation client and
//! returns the cleaned Markdown.

use super::{wrap_response, ApiResponse, AppError, AppState, DebugParams};
use crate::{
    errors::EMPTY_CONTENT_MESSAGE,
    types::{EmojifyRequest, EmojifyResponse},
};
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use serde_json::json;
use tracing::info;

/// The handler for `POST /emojify`.
///
/// Whitespace-only content is rejected without contacting the provider. A body
/// that does not deserialize (e.g. an unknown `format`) keeps axum's status
/// code but is reported in the same `{"error": ...}` shape.
pub async fn emojify_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
    payload: Result<Json<EmojifyRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<EmojifyResponse>>, AppError> {
    let Json(payload) = payload?;
    info!(
        format = %payload.format,
        content_len = payload.content.len(),
        "Received emojify request."
    );

    if payload.content.trim().is_empty() {
        return Err(AppError::Validation(EMPTY_CONTENT_MESSAGE.to_string()));
    }

    let result = app_state
        .client
        .generate_with_details(&payload.content, payload.format)
        .await?;

    let debug_info = Some(json!({
        "format": payload.format,
        "prompt": result.prompt,
        "raw_response": result.raw_response,
    }));

    Ok(wrap_response(
        EmojifyResponse { text: result.text },
        debug_params,
        debug_info,
    ))
}
