use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};

use crate::modules::articles::adapters::inbound::pages::render_article;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.get_article.handle(&id).await {
        Ok(article) => Html(render_article(&article)).into_response(),
        Err(e) => e.into_response(),
    }
}
