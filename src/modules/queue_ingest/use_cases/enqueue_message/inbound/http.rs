use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct EnqueueMessageResponse {
    pub message_id: String,
}

/// The request body is sent to the queue verbatim.
pub async fn handle(State(state): State<AppState>, body: String) -> Response {
    match state.enqueue_message.handle(body).await {
        Ok(message_id) => (
            StatusCode::ACCEPTED,
            Json(EnqueueMessageResponse { message_id }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
mod enqueue_message_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::shared::infrastructure::message_queue::MessageQueue;
    use crate::shared::infrastructure::message_queue::in_memory::InMemoryMessageQueue;
    use crate::shell::state::{AppState, Backends};
    use crate::test_support::fixtures::test_config;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/messages", post(handle))
            .with_state(state)
    }

    #[tokio::test]
    async fn it_should_return_202_and_enqueue_the_body() {
        let backends = Backends::in_memory();
        let response = app(AppState::new(&backends, &test_config()))
            .oneshot(
                Request::post("/messages")
                    .body(Body::from(r#"{"order":42}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(backends.queue.approximate_depth().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn it_should_return_400_on_an_empty_body() {
        let backends = Backends::in_memory();
        let response = app(AppState::new(&backends, &test_config()))
            .oneshot(Request::post("/messages").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_queue_is_offline() {
        let mut queue = InMemoryMessageQueue::new();
        queue.toggle_offline();
        let backends = Backends {
            queue: Arc::new(queue),
            ..Backends::in_memory()
        };
        let response = app(AppState::new(&backends, &test_config()))
            .oneshot(Request::post("/messages").body(Body::from("x")).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
