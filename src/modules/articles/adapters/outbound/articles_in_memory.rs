use crate::modules::articles::adapters::outbound::article_repository::ArticleRepository;
use crate::modules::articles::core::article::Article;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryArticles {
    rows: RwLock<HashMap<String, Article>>,
    is_offline: bool,
}

impl InMemoryArticles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn check_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Article repository offline"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ArticleRepository for InMemoryArticles {
    async fn get(&self, id: &str) -> anyhow::Result<Option<Article>> {
        self.check_online()?;
        Ok(self.rows.read().await.get(id).cloned())
    }

    async fn put(&self, article: &Article) -> anyhow::Result<()> {
        self.check_online()?;
        self.rows
            .write()
            .await
            .insert(article.id.clone(), article.clone());
        Ok(())
    }

    async fn list(&self) -> anyhow::Result<Vec<Article>> {
        self.check_online()?;
        Ok(self.rows.read().await.values().cloned().collect())
    }
}
