use crate::modules::articles::adapters::outbound::article_repository::ArticleRepository;
use crate::modules::articles::core::article::{Article, NewArticle};
use crate::modules::articles::core::errors::ArticleError;
use crate::shared::core::primitives::{new_id, now_millis};
use std::sync::Arc;

pub struct PublishArticleHandler<TRepository>
where
    TRepository: ArticleRepository + ?Sized,
{
    repository: Arc<TRepository>,
}

impl<TRepository> PublishArticleHandler<TRepository>
where
    TRepository: ArticleRepository + ?Sized,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, new_article: NewArticle) -> Result<Article, ArticleError> {
        new_article.validate()?;
        let article = Article {
            id: new_id(),
            title: new_article.title.trim().to_string(),
            body: new_article.body,
            author: new_article.author.trim().to_string(),
            created_at: now_millis(),
        };
        self.repository.put(&article).await?;
        tracing::info!(article_id = %article.id, author = %article.author, "article published");
        Ok(article)
    }
}
