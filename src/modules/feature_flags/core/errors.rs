use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlagError {
    #[error("invalid flag request: {0}")]
    Invalid(String),

    #[error("feature flag not found")]
    NotFound,

    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}
