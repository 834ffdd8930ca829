// DynamoDB implementation of the PasteRepository port.
//
// Table layout: partition key `id` (S), attributes `text` (S) and `created_at` (N).

use crate::modules::pastes::adapters::outbound::paste_repository::PasteRepository;
use crate::modules::pastes::core::paste::Paste;
use crate::shared::infrastructure::dynamodb::{number_attr, string_attr};
use anyhow::Context;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;

pub struct DynamoDbPastes {
    client: Client,
    table: String,
}

impl DynamoDbPastes {
    pub fn new(client: Client, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }
}

#[async_trait::async_trait]
impl PasteRepository for DynamoDbPastes {
    async fn get(&self, id: &str) -> anyhow::Result<Option<Paste>> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .with_context(|| format!("get_item on {} failed", self.table))?;
        let Some(item) = output.item() else {
            return Ok(None);
        };
        Ok(Some(Paste {
            id: id.to_string(),
            text: string_attr(item, "text")?,
            created_at: number_attr(item, "created_at")?,
        }))
    }

    async fn put(&self, paste: &Paste) -> anyhow::Result<()> {
        self.client
            .put_item()
            .table_name(&self.table)
            .item("id", AttributeValue::S(paste.id.clone()))
            .item("text", AttributeValue::S(paste.text.clone()))
            .item("created_at", AttributeValue::N(paste.created_at.to_string()))
            .send()
            .await
            .with_context(|| format!("put_item on {} failed", self.table))?;
        Ok(())
    }
}
