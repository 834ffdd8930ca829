use crate::modules::articles::core::errors::ArticleError;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub body: String,
    pub author: String,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewArticle {
    pub title: String,
    pub body: String,
    pub author: String,
}

impl NewArticle {
    pub fn validate(&self) -> Result<(), ArticleError> {
        for (name, value) in [
            ("title", &self.title),
            ("body", &self.body),
            ("author", &self.author),
        ] {
            if value.trim().is_empty() {
                return Err(ArticleError::Invalid(format!("`{name}` must not be empty")));
            }
        }
        Ok(())
    }
}

/// Newest first; ties fall back to id so the order is stable across scans.
pub fn sort_newest_first(articles: &mut [Article]) {
    articles.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}
