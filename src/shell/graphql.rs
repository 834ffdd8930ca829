use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::articles::adapters::inbound::graphql::{ArticleMutation, ArticleQuery};
use crate::modules::feature_flags::adapters::inbound::graphql::{FlagMutation, FlagQuery};
use crate::modules::pastes::adapters::inbound::graphql::{PasteMutation, PasteQuery};
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(FlagQuery, PasteQuery, ArticleQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(FlagMutation, PasteMutation, ArticleMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
