// In memory implementation of the MessageQueue port.
//
// Purpose
// - Run the consumer loop in tests and local development without SQS.
//
// Responsibilities
// - Keep visible messages in arrival order.
// - Move received messages in flight until they are deleted or released.

use crate::shared::core::primitives::new_id;
use crate::shared::infrastructure::message_queue::{MessageQueue, QueueMessage};
use std::collections::{HashMap, VecDeque};
use tokio::sync::Mutex;

#[derive(Default)]
struct QueueState {
    visible: VecDeque<QueueMessage>,
    in_flight: HashMap<String, QueueMessage>,
}

#[derive(Default)]
pub struct InMemoryMessageQueue {
    state: Mutex<QueueState>,
    is_offline: bool,
}

impl InMemoryMessageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn in_flight_len(&self) -> usize {
        self.state.lock().await.in_flight.len()
    }

    /// Makes every in-flight message visible again, as an expired visibility timeout would.
    pub async fn release_in_flight(&self) {
        let mut state = self.state.lock().await;
        let released: Vec<QueueMessage> = state.in_flight.drain().map(|(_, m)| m).collect();
        state.visible.extend(released);
    }

    fn check_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Message queue offline"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl MessageQueue for InMemoryMessageQueue {
    async fn approximate_depth(&self) -> anyhow::Result<u64> {
        self.check_online()?;
        Ok(self.state.lock().await.visible.len() as u64)
    }

    async fn receive(&self, max_messages: i32) -> anyhow::Result<Vec<QueueMessage>> {
        self.check_online()?;
        let mut state = self.state.lock().await;
        let take = (max_messages.max(0) as usize).min(state.visible.len());
        let batch: Vec<QueueMessage> = state
            .visible
            .drain(..take)
            .map(|m| QueueMessage {
                receipt_handle: new_id(),
                ..m
            })
            .collect();
        for message in &batch {
            state
                .in_flight
                .insert(message.receipt_handle.clone(), message.clone());
        }
        Ok(batch)
    }

    async fn delete(&self, receipt_handle: &str) -> anyhow::Result<()> {
        self.check_online()?;
        self.state
            .lock()
            .await
            .in_flight
            .remove(receipt_handle)
            .map(|_| ())
            .ok_or_else(|| anyhow::anyhow!("unknown receipt handle {receipt_handle}"))
    }

    async fn send(&self, body: &str) -> anyhow::Result<String> {
        self.check_online()?;
        let message_id = new_id();
        self.state.lock().await.visible.push_back(QueueMessage {
            message_id: message_id.clone(),
            receipt_handle: String::new(),
            body: body.to_string(),
        });
        Ok(message_id)
    }
}

#[cfg(test)]
mod in_memory_message_queue_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_report_the_number_of_visible_messages() {
        let queue = InMemoryMessageQueue::new();
        assert_eq!(queue.approximate_depth().await.unwrap(), 0);
        queue.send("one").await.unwrap();
        queue.send("two").await.unwrap();
        assert_eq!(queue.approximate_depth().await.unwrap(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_receive_in_arrival_order_up_to_the_maximum() {
        let queue = InMemoryMessageQueue::new();
        for body in ["a", "b", "c"] {
            queue.send(body).await.unwrap();
        }
        let batch = queue.receive(2).await.unwrap();
        let bodies: Vec<&str> = batch.iter().map(|m| m.body.as_str()).collect();
        assert_eq!(bodies, vec!["a", "b"]);
        assert_eq!(queue.approximate_depth().await.unwrap(), 1);
        assert_eq!(queue.in_flight_len().await, 2);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_forget_deleted_messages() {
        let queue = InMemoryMessageQueue::new();
        queue.send("a").await.unwrap();
        let batch = queue.receive(5).await.unwrap();
        queue.delete(&batch[0].receipt_handle).await.unwrap();
        queue.release_in_flight().await;
        assert_eq!(queue.approximate_depth().await.unwrap(), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_redeliver_released_messages() {
        let queue = InMemoryMessageQueue::new();
        let id = queue.send("a").await.unwrap();
        let first = queue.receive(5).await.unwrap();
        queue.release_in_flight().await;
        let second = queue.receive(5).await.unwrap();
        assert_eq!(second[0].message_id, id);
        assert_ne!(second[0].receipt_handle, first[0].receipt_handle);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_delete_an_unknown_receipt_handle() {
        let queue = InMemoryMessageQueue::new();
        assert!(queue.delete("nope").await.is_err());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_queue_is_offline() {
        let mut queue = InMemoryMessageQueue::new();
        queue.toggle_offline();
        let result = queue.approximate_depth().await;
        assert!(result.unwrap_err().to_string().contains("Message queue offline"));
        assert!(queue.send("a").await.is_err());
    }
}
