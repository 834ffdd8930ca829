use crate::modules::articles::core::article::Article;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn get(&self, id: &str) -> anyhow::Result<Option<Article>>;
    async fn put(&self, article: &Article) -> anyhow::Result<()>;
    /// Every stored article, in no particular order.
    async fn list(&self) -> anyhow::Result<Vec<Article>>;
}
