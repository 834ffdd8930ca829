use crate::modules::articles::adapters::outbound::article_repository::ArticleRepository;
use crate::modules::articles::core::article::{Article, sort_newest_first};
use crate::modules::articles::core::errors::ArticleError;
use std::sync::Arc;

pub struct ListArticlesHandler<TRepository>
where
    TRepository: ArticleRepository + ?Sized,
{
    repository: Arc<TRepository>,
}

impl<TRepository> ListArticlesHandler<TRepository>
where
    TRepository: ArticleRepository + ?Sized,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<Article>, ArticleError> {
        let mut articles = self.repository.list().await?;
        sort_newest_first(&mut articles);
        Ok(articles)
    }
}

#[cfg(test)]
mod list_articles_handler_tests {
    use super::*;
    use crate::modules::articles::adapters::outbound::articles_in_memory::InMemoryArticles;
    use crate::test_support::fixtures::ArticleBuilder;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_return_articles_newest_first() {
        let repository = Arc::new(InMemoryArticles::new());
        for (id, created_at) in [("old", 1), ("new", 3), ("mid", 2)] {
            repository
                .put(&ArticleBuilder::new().id(id).created_at(created_at).build())
                .await
                .unwrap();
        }
        let handler = ListArticlesHandler::new(repository);
        let ids: Vec<String> = handler
            .handle()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_repository_is_offline() {
        let mut repository = InMemoryArticles::new();
        repository.toggle_offline();
        let handler = ListArticlesHandler::new(Arc::new(repository));
        assert!(matches!(
            handler.handle().await,
            Err(ArticleError::Repository(_))
        ));
    }
}
