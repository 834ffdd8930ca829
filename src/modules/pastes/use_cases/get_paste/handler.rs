use crate::modules::pastes::adapters::outbound::paste_repository::PasteRepository;
use crate::modules::pastes::core::errors::PasteError;
use crate::modules::pastes::core::paste::Paste;
use std::sync::Arc;

pub struct GetPasteHandler<TRepository>
where
    TRepository: PasteRepository + ?Sized,
{
    repository: Arc<TRepository>,
}

impl<TRepository> GetPasteHandler<TRepository>
where
    TRepository: PasteRepository + ?Sized,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, id: &str) -> Result<Paste, PasteError> {
        self.repository.get(id).await?.ok_or(PasteError::NotFound)
    }
}
