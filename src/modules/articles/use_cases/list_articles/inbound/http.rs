use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};

use crate::modules::articles::adapters::inbound::pages::render_index;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Response {
    match state.list_articles.handle().await {
        Ok(articles) => Html(render_index(&articles)).into_response(),
        Err(e) => e.into_response(),
    }
}
