use axum::{
    Json,
    extract::{State, rejection::StringRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::shared::http::error_body;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct CreatePasteResponse {
    pub id: String,
}

/// The request body is the paste text itself. The route caps the body at the
/// paste limit, so an overflowing body is rejected here rather than buffered.
pub async fn handle(
    State(state): State<AppState>,
    text: Result<String, StringRejection>,
) -> Response {
    let text = match text {
        Ok(text) => text,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return error_body(
                StatusCode::BAD_REQUEST,
                format!(
                    "paste exceeds the limit of {} bytes",
                    state.create_paste.max_bytes()
                ),
            );
        }
        Err(rejection) => return rejection.into_response(),
    };
    match state.create_paste.handle(text).await {
        Ok(id) => (StatusCode::CREATED, Json(CreatePasteResponse { id })).into_response(),
        Err(e) => e.into_response(),
    }
}
