// SQS implementation of the MessageQueue port.

use crate::shared::infrastructure::message_queue::{MessageQueue, QueueMessage};
use anyhow::Context;
use aws_sdk_sqs::Client;
use aws_sdk_sqs::types::QueueAttributeName;
use std::collections::HashMap;

pub struct SqsMessageQueue {
    client: Client,
    queue_url: String,
}

impl SqsMessageQueue {
    pub fn new(client: Client, queue_url: impl Into<String>) -> Self {
        Self {
            client,
            queue_url: queue_url.into(),
        }
    }
}

/// Fails when the attribute is absent instead of reporting an empty queue.
fn depth_from_attributes(
    attributes: Option<&HashMap<QueueAttributeName, String>>,
) -> anyhow::Result<u64> {
    let raw = attributes
        .and_then(|attrs| attrs.get(&QueueAttributeName::ApproximateNumberOfMessages))
        .context("get_queue_attributes returned no ApproximateNumberOfMessages")?;
    raw.parse::<u64>()
        .with_context(|| format!("unexpected ApproximateNumberOfMessages value {raw}"))
}

#[async_trait::async_trait]
impl MessageQueue for SqsMessageQueue {
    async fn approximate_depth(&self) -> anyhow::Result<u64> {
        let output = self
            .client
            .get_queue_attributes()
            .queue_url(&self.queue_url)
            .attribute_names(QueueAttributeName::ApproximateNumberOfMessages)
            .send()
            .await
            .context("get_queue_attributes failed")?;
        depth_from_attributes(output.attributes())
    }

    async fn receive(&self, max_messages: i32) -> anyhow::Result<Vec<QueueMessage>> {
        let output = self
            .client
            .receive_message()
            .queue_url(&self.queue_url)
            .max_number_of_messages(max_messages)
            .send()
            .await
            .context("receive_message failed")?;
        let mut messages = Vec::with_capacity(output.messages().len());
        for message in output.messages() {
            let (Some(message_id), Some(receipt_handle)) =
                (message.message_id(), message.receipt_handle())
            else {
                tracing::warn!("skipping SQS message without id or receipt handle");
                continue;
            };
            messages.push(QueueMessage {
                message_id: message_id.to_string(),
                receipt_handle: receipt_handle.to_string(),
                body: message.body().unwrap_or_default().to_string(),
            });
        }
        Ok(messages)
    }

    async fn delete(&self, receipt_handle: &str) -> anyhow::Result<()> {
        self.client
            .delete_message()
            .queue_url(&self.queue_url)
            .receipt_handle(receipt_handle)
            .send()
            .await
            .context("delete_message failed")?;
        Ok(())
    }

    async fn send(&self, body: &str) -> anyhow::Result<String> {
        let output = self
            .client
            .send_message()
            .queue_url(&self.queue_url)
            .message_body(body)
            .send()
            .await
            .context("send_message failed")?;
        output
            .message_id()
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("send_message returned no message id"))
    }
}

#[cfg(test)]
mod sqs_depth_tests {
    use super::*;
    use rstest::rstest;

    fn attributes(value: &str) -> HashMap<QueueAttributeName, String> {
        HashMap::from([(
            QueueAttributeName::ApproximateNumberOfMessages,
            value.to_string(),
        )])
    }

    #[rstest]
    fn it_should_parse_the_reported_depth() {
        assert_eq!(depth_from_attributes(Some(&attributes("17"))).unwrap(), 17);
    }

    #[rstest]
    fn it_should_fail_when_the_attribute_is_missing() {
        let error = depth_from_attributes(Some(&HashMap::new())).unwrap_err();
        assert!(error.to_string().contains("ApproximateNumberOfMessages"));
        assert!(depth_from_attributes(None).is_err());
    }

    #[rstest]
    fn it_should_fail_on_a_non_numeric_value() {
        assert!(depth_from_attributes(Some(&attributes("many"))).is_err());
    }
}
