use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("message body must not be empty")]
    EmptyBody,

    #[error("message not ingested")]
    NotFound,

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}
