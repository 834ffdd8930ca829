use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(message_id): Path<String>) -> Response {
    match state.get_ingested_message.handle(&message_id).await {
        Ok(message) => Json(message).into_response(),
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
mod get_ingested_message_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::queue_ingest::adapters::outbound::ingested_message_repository::IngestedMessageRepository;
    use crate::modules::queue_ingest::core::ingested_message::IngestedMessage;
    use crate::shell::state::{AppState, Backends};
    use crate::test_support::fixtures::test_config;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/messages/{id}", get(handle))
            .with_state(state)
    }

    #[tokio::test]
    async fn it_should_return_the_ingested_record() {
        let backends = Backends::in_memory();
        let record = IngestedMessage {
            message_id: "m-1".to_string(),
            body: "order placed".to_string(),
            received_at: 1_700_000_000_000,
        };
        backends.ingested.put(&record).await.unwrap();

        let response = app(AppState::new(&backends, &test_config()))
            .oneshot(Request::get("/messages/m-1").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: IngestedMessage = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, record);
    }

    #[tokio::test]
    async fn it_should_return_404_before_the_message_is_ingested() {
        let backends = Backends::in_memory();
        let response = app(AppState::new(&backends, &test_config()))
            .oneshot(Request::get("/messages/m-1").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
