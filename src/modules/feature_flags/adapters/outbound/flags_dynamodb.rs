// DynamoDB implementation of the FlagRepository port.
//
// Table layout
// - Partition key `feature` (S), sort key `target` (S, `client#stage`).
// - Attribute `enabled` (BOOL).

use crate::modules::feature_flags::adapters::outbound::flag_repository::FlagRepository;
use crate::modules::feature_flags::core::flag::{FeatureFlag, FlagKey};
use crate::shared::infrastructure::dynamodb::bool_attr;
use anyhow::Context;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;

pub struct DynamoDbFlags {
    client: Client,
    table: String,
}

impl DynamoDbFlags {
    pub fn new(client: Client, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }
}

#[async_trait::async_trait]
impl FlagRepository for DynamoDbFlags {
    async fn get(&self, key: &FlagKey) -> anyhow::Result<Option<FeatureFlag>> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table)
            .key("feature", AttributeValue::S(key.feature.clone()))
            .key("target", AttributeValue::S(key.target()))
            .send()
            .await
            .with_context(|| format!("get_item on {} failed", self.table))?;
        match output.item() {
            Some(item) => Ok(Some(FeatureFlag {
                key: key.clone(),
                enabled: bool_attr(item, "enabled")?,
            })),
            None => Ok(None),
        }
    }

    async fn put(&self, flag: &FeatureFlag) -> anyhow::Result<()> {
        self.client
            .put_item()
            .table_name(&self.table)
            .item("feature", AttributeValue::S(flag.key.feature.clone()))
            .item("target", AttributeValue::S(flag.key.target()))
            .item("enabled", AttributeValue::Bool(flag.enabled))
            .send()
            .await
            .with_context(|| format!("put_item on {} failed", self.table))?;
        Ok(())
    }
}
