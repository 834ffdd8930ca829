use crate::modules::queue_ingest::core::ingested_message::IngestedMessage;
use async_trait::async_trait;

#[async_trait]
pub trait IngestedMessageRepository: Send + Sync {
    /// Upsert by message id, so a redelivered message overwrites its earlier copy.
    async fn put(&self, message: &IngestedMessage) -> anyhow::Result<()>;
    async fn get(&self, message_id: &str) -> anyhow::Result<Option<IngestedMessage>>;
}
