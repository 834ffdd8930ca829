use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::feature_flags::core::flag::{FeatureFlagView, FlagKey};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct GetFlagParams {
    pub feature: Option<String>,
    pub client: Option<String>,
    pub stage: Option<String>,
}

pub async fn handle(State(state): State<AppState>, Query(params): Query<GetFlagParams>) -> Response {
    let key = match FlagKey::new(params.feature, params.client, params.stage) {
        Ok(key) => key,
        Err(e) => return e.into_response(),
    };
    match state.get_flag.handle(&key).await {
        Ok(flag) => Json(FeatureFlagView::from(flag)).into_response(),
        Err(e) => e.into_response(),
    }
}
