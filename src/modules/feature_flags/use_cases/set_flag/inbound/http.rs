use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::feature_flags::core::flag::{FeatureFlagView, FlagKey};
use crate::shared::http::error_body;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SetFlagBody {
    pub feature: Option<String>,
    pub client: Option<String>,
    pub stage: Option<String>,
    pub enabled: bool,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SetFlagBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return error_body(StatusCode::BAD_REQUEST, rejection.body_text()),
    };
    let key = match FlagKey::new(body.feature, body.client, body.stage) {
        Ok(key) => key,
        Err(e) => return e.into_response(),
    };
    match state.set_flag.handle(key, body.enabled).await {
        Ok(flag) => Json(FeatureFlagView::from(flag)).into_response(),
        Err(e) => e.into_response(),
    }
}
