// Port over a managed message queue with at-least-once delivery.
//
// Visibility timeouts and redelivery belong to the queue. A received message
// stays invisible until it is deleted or its visibility expires.

pub mod in_memory;
pub mod sqs;

use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueMessage {
    pub message_id: String,
    pub receipt_handle: String,
    pub body: String,
}

#[async_trait]
pub trait MessageQueue: Send + Sync {
    /// Approximate number of visible messages, as reported by the queue.
    async fn approximate_depth(&self) -> anyhow::Result<u64>;
    async fn receive(&self, max_messages: i32) -> anyhow::Result<Vec<QueueMessage>>;
    async fn delete(&self, receipt_handle: &str) -> anyhow::Result<()>;
    /// Returns the id the queue assigned to the message.
    async fn send(&self, body: &str) -> anyhow::Result<String>;
}
