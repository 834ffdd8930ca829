use crate::modules::queue_ingest::core::errors::IngestError;
use crate::shared::infrastructure::message_queue::MessageQueue;
use std::sync::Arc;

pub struct EnqueueMessageHandler<TQueue>
where
    TQueue: MessageQueue + ?Sized,
{
    queue: Arc<TQueue>,
}

impl<TQueue> EnqueueMessageHandler<TQueue>
where
    TQueue: MessageQueue + ?Sized,
{
    pub fn new(queue: Arc<TQueue>) -> Self {
        Self { queue }
    }

    /// Returns the id the queue assigned to the message.
    pub async fn handle(&self, body: String) -> Result<String, IngestError> {
        if body.trim().is_empty() {
            return Err(IngestError::EmptyBody);
        }
        let message_id = self.queue.send(&body).await?;
        tracing::info!(message_id = %message_id, "message enqueued");
        Ok(message_id)
    }
}
