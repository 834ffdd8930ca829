use crate::modules::pastes::adapters::outbound::paste_repository::PasteRepository;
use crate::modules::pastes::core::errors::PasteError;
use crate::modules::pastes::core::paste::{Paste, validate_text};
use crate::shared::core::primitives::{new_id, now_millis};
use std::sync::Arc;

pub struct CreatePasteHandler<TRepository>
where
    TRepository: PasteRepository + ?Sized,
{
    repository: Arc<TRepository>,
    max_bytes: usize,
}

impl<TRepository> CreatePasteHandler<TRepository>
where
    TRepository: PasteRepository + ?Sized,
{
    pub fn new(repository: Arc<TRepository>, max_bytes: usize) -> Self {
        Self {
            repository,
            max_bytes,
        }
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Stores `text` under a fresh id and returns that id.
    pub async fn handle(&self, text: String) -> Result<String, PasteError> {
        validate_text(&text, self.max_bytes)?;
        let paste = Paste {
            id: new_id(),
            text,
            created_at: now_millis(),
        };
        self.repository.put(&paste).await?;
        tracing::info!(paste_id = %paste.id, bytes = paste.text.len(), "paste created");
        Ok(paste.id)
    }
}
