use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::modules::articles::adapters::inbound::pages::render_not_found;
use crate::modules::articles::core::errors::ArticleError;
use crate::shared::http::error_body;

/// Readers browse the blog, so a missing article renders the HTML not-found page.
impl IntoResponse for ArticleError {
    fn into_response(self) -> Response {
        match self {
            ArticleError::Invalid(message) => error_body(StatusCode::BAD_REQUEST, message),
            ArticleError::NotFound => {
                (StatusCode::NOT_FOUND, Html(render_not_found())).into_response()
            }
            ArticleError::Repository(err) => {
                tracing::error!(error = %err, "article repository failure");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
