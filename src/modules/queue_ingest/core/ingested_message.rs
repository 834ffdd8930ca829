use serde::{Deserialize, Serialize};

/// A queue message persisted by the consumer, keyed by the queue's message id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestedMessage {
    pub message_id: String,
    pub body: String,
    pub received_at: i64,
}
