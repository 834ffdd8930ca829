use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::modules::queue_ingest::use_cases::drain_queue::handler::{PollOutcome, QueueDrainer};
use crate::shell::http::router;
use crate::shell::state::{AppState, Backends};
use crate::test_support::fixtures::test_config;

struct App {
    backends: Backends,
    router: Router,
}

#[fixture]
fn app() -> App {
    let backends = Backends::in_memory();
    let router = router(AppState::new(&backends, &test_config()));
    App { backends, router }
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[rstest]
#[tokio::test]
async fn health_reports_ok(app: App) {
    let (status, body) = send(&app.router, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[rstest]
#[tokio::test]
async fn paste_round_trip_returns_the_same_text(app: App) {
    let text = "fn main() {\n    println!(\"hi\");\n}\n";
    let create = Request::builder()
        .method("POST")
        .uri("/pastes")
        .body(Body::from(text))
        .unwrap();
    let (status, body) = send(&app.router, create).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = serde_json::from_str::<Value>(&body).unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let (status, body) = send(&app.router, get(&format!("/pastes/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, text);
}

#[rstest]
#[case::under_the_limit(3 * 1024 * 1024, StatusCode::CREATED)]
#[case::at_the_limit(4 * 1024 * 1024, StatusCode::CREATED)]
#[case::over_the_limit(4 * 1024 * 1024 + 1, StatusCode::BAD_REQUEST)]
#[tokio::test]
async fn paste_limit_above_the_default_body_limit_is_honoured(
    #[case] size: usize,
    #[case] expected: StatusCode,
) {
    let mut config = test_config();
    config.paste_max_bytes = 4 * 1024 * 1024;
    let router = router(AppState::new(&Backends::in_memory(), &config));
    let create = Request::builder()
        .method("POST")
        .uri("/pastes")
        .body(Body::from("a".repeat(size)))
        .unwrap();

    let (status, _) = send(&router, create).await;
    assert_eq!(status, expected);
}

#[rstest]
#[tokio::test]
async fn two_pastes_get_distinct_ids(app: App) {
    let mut ids = Vec::new();
    for _ in 0..2 {
        let create = Request::builder()
            .method("POST")
            .uri("/pastes")
            .body(Body::from("same text"))
            .unwrap();
        let (_, body) = send(&app.router, create).await;
        ids.push(serde_json::from_str::<Value>(&body).unwrap()["id"].clone());
    }
    assert_ne!(ids[0], ids[1]);
}

#[rstest]
#[tokio::test]
async fn flag_lifecycle_set_get_toggle(app: App) {
    let query = "/flags?feature=checkout&client=web&stage=prod";
    let (status, _) = send(&app.router, get(query)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app.router,
        json_request(
            "PUT",
            "/flags",
            json!({ "feature": "checkout", "client": "web", "stage": "prod", "enabled": true }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app.router, get(query)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({ "feature": "checkout", "client": "web", "stage": "prod", "enabled": true })
    );

    let (status, body) = send(
        &app.router,
        json_request(
            "POST",
            "/flags/toggle",
            json!({ "feature": "checkout", "client": "web", "stage": "prod" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap()["enabled"], false);
}

#[rstest]
#[tokio::test]
async fn flag_lookup_without_stage_is_a_bad_request(app: App) {
    let (status, body) = send(&app.router, get("/flags?feature=checkout&client=web")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("stage"));
}

#[rstest]
#[tokio::test]
async fn flag_components_cannot_contain_the_target_separator(app: App) {
    let (status, _) = send(
        &app.router,
        json_request(
            "PUT",
            "/flags",
            json!({ "feature": "checkout", "client": "web#beta", "stage": "prod", "enabled": true }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app.router, get("/flags?feature=checkout&client=web&stage=beta%23prod")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("stage"));
}

#[rstest]
#[tokio::test]
async fn published_article_shows_on_index_and_page(app: App) {
    let (status, body) = send(
        &app.router,
        json_request(
            "POST",
            "/articles",
            json!({ "title": "Cortado <3", "body": "Equal parts.", "author": "Lu" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = serde_json::from_str::<Value>(&body).unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let (status, index) = send(&app.router, get("/articles")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(index.contains(&format!("/articles/{id}")));
    assert!(index.contains("Cortado &lt;3"));

    let (status, page) = send(&app.router, get(&format!("/articles/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("Equal parts."));
}

#[rstest]
#[tokio::test]
async fn unknown_article_renders_not_found_page(app: App) {
    let (status, body) = send(&app.router, get("/articles/missing")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("<html"));
}

#[rstest]
#[tokio::test]
async fn enqueued_message_is_visible_after_a_drain(app: App) {
    let enqueue = Request::builder()
        .method("POST")
        .uri("/messages")
        .body(Body::from("order 7 paid"))
        .unwrap();
    let (status, body) = send(&app.router, enqueue).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    let message_id = serde_json::from_str::<Value>(&body).unwrap()["message_id"]
        .as_str()
        .unwrap()
        .to_string();

    let uri = format!("/messages/{message_id}");
    let (status, _) = send(&app.router, get(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let drainer = QueueDrainer::new(app.backends.queue.clone(), app.backends.ingested.clone());
    assert_eq!(
        drainer.poll_once().await.unwrap(),
        PollOutcome::Processed { stored: 1, failed: 0 }
    );
    assert_eq!(drainer.poll_once().await.unwrap(), PollOutcome::Empty);

    let (status, body) = send(&app.router, get(&uri)).await;
    assert_eq!(status, StatusCode::OK);
    let record: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(record["message_id"], message_id.as_str());
    assert_eq!(record["body"], "order 7 paid");
}

#[rstest]
#[tokio::test]
async fn graphql_endpoint_serves_queries_and_graphiql(app: App) {
    let (status, body) = send(
        &app.router,
        json_request("POST", "/gql", json!({ "query": "{ articles { id } }" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        serde_json::from_str::<Value>(&body).unwrap(),
        json!({ "data": { "articles": [] } })
    );

    let (status, page) = send(&app.router, get("/gql")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.to_lowercase().contains("graphiql"));
}
