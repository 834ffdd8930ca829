// Queue drainer moves messages from the managed queue into the message table.
//
// Loop
// - Ask the queue for its approximate depth. Zero means sleep for the idle interval.
// - Otherwise receive up to `batch_size` messages and handle them one at a time:
//   persist, then delete from the queue.
// - A message that fails to persist is not deleted. The queue redelivers it once
//   its visibility timeout expires, and the upsert by message id absorbs duplicates.

use crate::modules::queue_ingest::adapters::outbound::ingested_message_repository::IngestedMessageRepository;
use crate::modules::queue_ingest::core::ingested_message::IngestedMessage;
use crate::shared::core::primitives::now_millis;
use crate::shared::infrastructure::message_queue::{MessageQueue, QueueMessage};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

pub const DEFAULT_BATCH_SIZE: i32 = 5;
/// Upper bound SQS accepts for a single receive.
pub const MAX_BATCH_SIZE: i32 = 10;
pub const DEFAULT_IDLE_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The queue reported no messages, or a receive returned none.
    Empty,
    Processed { stored: usize, failed: usize },
}

pub struct QueueDrainer<TQueue, TRepository>
where
    TQueue: MessageQueue + ?Sized,
    TRepository: IngestedMessageRepository + ?Sized,
{
    queue: Arc<TQueue>,
    repository: Arc<TRepository>,
    batch_size: i32,
    idle_interval: Duration,
}

impl<TQueue, TRepository> QueueDrainer<TQueue, TRepository>
where
    TQueue: MessageQueue + ?Sized,
    TRepository: IngestedMessageRepository + ?Sized,
{
    pub fn new(queue: Arc<TQueue>, repository: Arc<TRepository>) -> Self {
        Self {
            queue,
            repository,
            batch_size: DEFAULT_BATCH_SIZE,
            idle_interval: DEFAULT_IDLE_INTERVAL,
        }
    }

    pub fn with_batch_size(mut self, batch_size: i32) -> Self {
        self.batch_size = batch_size.clamp(1, MAX_BATCH_SIZE);
        self
    }

    pub fn with_idle_interval(mut self, idle_interval: Duration) -> Self {
        self.idle_interval = idle_interval;
        self
    }

    pub fn batch_size(&self) -> i32 {
        self.batch_size
    }

    pub async fn poll_once(&self) -> anyhow::Result<PollOutcome> {
        if self.queue.approximate_depth().await? == 0 {
            return Ok(PollOutcome::Empty);
        }
        let messages = self.queue.receive(self.batch_size).await?;
        if messages.is_empty() {
            return Ok(PollOutcome::Empty);
        }

        let (mut stored, mut failed) = (0, 0);
        for message in messages {
            if self.ingest(message).await {
                stored += 1;
            } else {
                failed += 1;
            }
        }
        Ok(PollOutcome::Processed { stored, failed })
    }

    async fn ingest(&self, message: QueueMessage) -> bool {
        let record = IngestedMessage {
            message_id: message.message_id,
            body: message.body,
            received_at: now_millis(),
        };
        if let Err(e) = self.repository.put(&record).await {
            tracing::warn!(
                message_id = %record.message_id,
                error = %e,
                "persisting message failed, leaving it on the queue"
            );
            return false;
        }
        if let Err(e) = self.queue.delete(&message.receipt_handle).await {
            tracing::warn!(
                message_id = %record.message_id,
                error = %e,
                "deleting persisted message failed"
            );
            return false;
        }
        tracing::debug!(message_id = %record.message_id, "message ingested");
        true
    }

    /// Polls until `shutdown` turns true or its sender is dropped.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        tracing::info!(
            batch_size = self.batch_size,
            idle_ms = self.idle_interval.as_millis() as u64,
            "queue drainer started"
        );
        loop {
            if *shutdown.borrow() {
                break;
            }
            let idle = match self.poll_once().await {
                Ok(PollOutcome::Empty) => true,
                Ok(PollOutcome::Processed { stored, failed }) => {
                    tracing::info!(stored, failed, "batch processed");
                    false
                }
                Err(e) => {
                    tracing::error!(error = %e, "polling the queue failed");
                    true
                }
            };
            if idle {
                tokio::select! {
                    _ = tokio::time::sleep(self.idle_interval) => {}
                    changed = shutdown.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                }
            }
        }
        tracing::info!("queue drainer stopped");
    }
}
