use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::articles::core::article::NewArticle;
use crate::shared::http::error_body;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct PublishArticleResponse {
    pub id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<NewArticle>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return error_body(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    match state.publish_article.handle(body).await {
        Ok(article) => (
            StatusCode::CREATED,
            Json(PublishArticleResponse { id: article.id }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
