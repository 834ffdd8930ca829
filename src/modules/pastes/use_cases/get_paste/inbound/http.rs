use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.get_paste.handle(&id).await {
        Ok(paste) => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            paste.text,
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
