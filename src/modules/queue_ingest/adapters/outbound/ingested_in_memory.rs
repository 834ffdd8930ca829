use crate::modules::queue_ingest::adapters::outbound::ingested_message_repository::IngestedMessageRepository;
use crate::modules::queue_ingest::core::ingested_message::IngestedMessage;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryIngestedMessages {
    rows: RwLock<HashMap<String, IngestedMessage>>,
    is_offline: bool,
}

impl InMemoryIngestedMessages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }
}

#[async_trait::async_trait]
impl IngestedMessageRepository for InMemoryIngestedMessages {
    async fn put(&self, message: &IngestedMessage) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Message table offline"));
        }
        self.rows
            .write()
            .await
            .insert(message.message_id.clone(), message.clone());
        Ok(())
    }

    async fn get(&self, message_id: &str) -> anyhow::Result<Option<IngestedMessage>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Message table offline"));
        }
        Ok(self.rows.read().await.get(message_id).cloned())
    }
}
