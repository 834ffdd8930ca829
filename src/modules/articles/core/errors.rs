use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArticleError {
    #[error("invalid article: {0}")]
    Invalid(String),

    #[error("article not found")]
    NotFound,

    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}
