use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::articles::core::article::{Article, NewArticle};
use crate::modules::articles::core::errors::ArticleError;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlArticle {
    pub id: String,
    pub title: String,
    pub body: String,
    pub author: String,
    pub created_at: i64,
}

impl From<Article> for GqlArticle {
    fn from(a: Article) -> Self {
        Self {
            id: a.id,
            title: a.title,
            body: a.body,
            author: a.author,
            created_at: a.created_at,
        }
    }
}

#[derive(Default)]
pub struct ArticleQuery;

#[Object]
impl ArticleQuery {
    async fn articles(&self, context: &Context<'_>) -> GqlResult<Vec<GqlArticle>> {
        let state = context.data_unchecked::<AppState>();
        let list = state.list_articles.handle().await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    async fn article(&self, context: &Context<'_>, id: String) -> GqlResult<Option<GqlArticle>> {
        let state = context.data_unchecked::<AppState>();
        match state.get_article.handle(&id).await {
            Ok(article) => Ok(Some(article.into())),
            Err(ArticleError::NotFound) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[derive(Default)]
pub struct ArticleMutation;

#[Object]
impl ArticleMutation {
    async fn publish_article(
        &self,
        context: &Context<'_>,
        title: String,
        body: String,
        author: String,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let article = state
            .publish_article
            .handle(NewArticle {
                title,
                body,
                author,
            })
            .await?;
        Ok(ID(article.id))
    }
}
