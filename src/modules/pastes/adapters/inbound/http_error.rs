use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::pastes::core::errors::PasteError;
use crate::shared::http::error_body;

impl IntoResponse for PasteError {
    fn into_response(self) -> Response {
        match self {
            PasteError::Empty | PasteError::TooLarge { .. } => {
                error_body(StatusCode::BAD_REQUEST, self.to_string())
            }
            PasteError::NotFound => error_body(StatusCode::NOT_FOUND, "paste not found"),
            PasteError::Repository(err) => {
                tracing::error!(error = %err, "paste repository failure");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
