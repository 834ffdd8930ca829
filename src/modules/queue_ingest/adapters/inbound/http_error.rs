use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::queue_ingest::core::errors::IngestError;
use crate::shared::http::error_body;

impl IntoResponse for IngestError {
    fn into_response(self) -> Response {
        match self {
            IngestError::EmptyBody => error_body(StatusCode::BAD_REQUEST, self.to_string()),
            IngestError::NotFound => error_body(StatusCode::NOT_FOUND, "message not ingested"),
            IngestError::Backend(err) => {
                tracing::error!(error = %err, "queue ingest backend failure");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
