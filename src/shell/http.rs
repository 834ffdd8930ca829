use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::articles::use_cases::get_article::inbound::http as get_article_http;
use crate::modules::articles::use_cases::list_articles::inbound::http as list_articles_http;
use crate::modules::articles::use_cases::publish_article::inbound::http as publish_article_http;
use crate::modules::feature_flags::use_cases::get_flag::inbound::http as get_flag_http;
use crate::modules::feature_flags::use_cases::set_flag::inbound::http as set_flag_http;
use crate::modules::feature_flags::use_cases::toggle_flag::inbound::http as toggle_flag_http;
use crate::modules::pastes::use_cases::create_paste::inbound::http as create_paste_http;
use crate::modules::pastes::use_cases::get_paste::inbound::http as get_paste_http;
use crate::modules::queue_ingest::use_cases::enqueue_message::inbound::http as enqueue_message_http;
use crate::modules::queue_ingest::use_cases::get_ingested_message::inbound::http as get_ingested_message_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

async fn health() -> &'static str {
    "ok"
}

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    let paste_body_limit = DefaultBodyLimit::max(state.create_paste.max_bytes());
    Router::new()
        .route("/health", get(health))
        .route(
            "/flags",
            get(get_flag_http::handle).put(set_flag_http::handle),
        )
        .route("/flags/toggle", post(toggle_flag_http::handle))
        .route(
            "/pastes",
            post(create_paste_http::handle).layer(paste_body_limit),
        )
        .route("/pastes/{id}", get(get_paste_http::handle))
        .route(
            "/articles",
            get(list_articles_http::handle).post(publish_article_http::handle),
        )
        .route("/articles/{id}", get(get_article_http::handle))
        .route("/messages", post(enqueue_message_http::handle))
        .route("/messages/{id}", get(get_ingested_message_http::handle))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
