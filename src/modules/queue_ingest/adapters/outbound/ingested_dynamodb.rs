// DynamoDB implementation of the IngestedMessageRepository port.
//
// Table layout: partition key `message_id` (S), attributes `body` (S) and `received_at` (N).

use crate::modules::queue_ingest::adapters::outbound::ingested_message_repository::IngestedMessageRepository;
use crate::modules::queue_ingest::core::ingested_message::IngestedMessage;
use crate::shared::infrastructure::dynamodb::{number_attr, string_attr};
use anyhow::Context;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;

pub struct DynamoDbIngestedMessages {
    client: Client,
    table: String,
}

impl DynamoDbIngestedMessages {
    pub fn new(client: Client, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }
}

#[async_trait::async_trait]
impl IngestedMessageRepository for DynamoDbIngestedMessages {
    async fn put(&self, message: &IngestedMessage) -> anyhow::Result<()> {
        self.client
            .put_item()
            .table_name(&self.table)
            .item("message_id", AttributeValue::S(message.message_id.clone()))
            .item("body", AttributeValue::S(message.body.clone()))
            .item("received_at", AttributeValue::N(message.received_at.to_string()))
            .send()
            .await
            .with_context(|| format!("put_item on {} failed", self.table))?;
        Ok(())
    }

    async fn get(&self, message_id: &str) -> anyhow::Result<Option<IngestedMessage>> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table)
            .key("message_id", AttributeValue::S(message_id.to_string()))
            .send()
            .await
            .with_context(|| format!("get_item on {} failed", self.table))?;
        let Some(item) = output.item() else {
            return Ok(None);
        };
        Ok(Some(IngestedMessage {
            message_id: message_id.to_string(),
            body: string_attr(item, "body")?,
            received_at: number_attr(item, "received_at")?,
        }))
    }
}
