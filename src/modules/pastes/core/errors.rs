use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasteError {
    #[error("paste text must not be empty")]
    Empty,

    #[error("paste is {size} bytes, the limit is {max}")]
    TooLarge { size: usize, max: usize },

    #[error("paste not found")]
    NotFound,

    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}
