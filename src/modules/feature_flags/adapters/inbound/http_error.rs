use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::feature_flags::core::errors::FlagError;
use crate::shared::http::error_body;

impl IntoResponse for FlagError {
    fn into_response(self) -> Response {
        match self {
            FlagError::Invalid(message) => error_body(StatusCode::BAD_REQUEST, message),
            FlagError::NotFound => error_body(StatusCode::NOT_FOUND, "feature flag not found"),
            FlagError::Repository(err) => {
                tracing::error!(error = %err, "flag repository failure");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
