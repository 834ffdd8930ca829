use crate::modules::articles::adapters::outbound::article_repository::ArticleRepository;
use crate::modules::articles::core::article::Article;
use crate::modules::articles::core::errors::ArticleError;
use std::sync::Arc;

pub struct GetArticleHandler<TRepository>
where
    TRepository: ArticleRepository + ?Sized,
{
    repository: Arc<TRepository>,
}

impl<TRepository> GetArticleHandler<TRepository>
where
    TRepository: ArticleRepository + ?Sized,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, id: &str) -> Result<Article, ArticleError> {
        self.repository.get(id).await?.ok_or(ArticleError::NotFound)
    }
}
