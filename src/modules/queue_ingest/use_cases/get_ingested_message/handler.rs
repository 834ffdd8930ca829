use crate::modules::queue_ingest::adapters::outbound::ingested_message_repository::IngestedMessageRepository;
use crate::modules::queue_ingest::core::errors::IngestError;
use crate::modules::queue_ingest::core::ingested_message::IngestedMessage;
use std::sync::Arc;

pub struct GetIngestedMessageHandler<TRepository>
where
    TRepository: IngestedMessageRepository + ?Sized,
{
    repository: Arc<TRepository>,
}

impl<TRepository> GetIngestedMessageHandler<TRepository>
where
    TRepository: IngestedMessageRepository + ?Sized,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, message_id: &str) -> Result<IngestedMessage, IngestError> {
        self.repository
            .get(message_id)
            .await?
            .ok_or(IngestError::NotFound)
    }
}
