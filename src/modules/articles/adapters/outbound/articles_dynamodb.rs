// DynamoDB implementation of the ArticleRepository port.
//
// Table layout
// - Partition key `id` (S).
// - Attributes `title`, `body`, `author` (S) and `created_at` (N).
//
// `list` is a full scan that follows LastEvaluatedKey until the table is exhausted.

use crate::modules::articles::adapters::outbound::article_repository::ArticleRepository;
use crate::modules::articles::core::article::Article;
use crate::shared::infrastructure::dynamodb::{Item, number_attr, string_attr};
use anyhow::Context;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;

pub struct DynamoDbArticles {
    client: Client,
    table: String,
}

impl DynamoDbArticles {
    pub fn new(client: Client, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }
}

fn article_from_item(item: &Item) -> anyhow::Result<Article> {
    Ok(Article {
        id: string_attr(item, "id")?,
        title: string_attr(item, "title")?,
        body: string_attr(item, "body")?,
        author: string_attr(item, "author")?,
        created_at: number_attr(item, "created_at")?,
    })
}

#[async_trait::async_trait]
impl ArticleRepository for DynamoDbArticles {
    async fn get(&self, id: &str) -> anyhow::Result<Option<Article>> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .with_context(|| format!("get_item on {} failed", self.table))?;
        output.item().map(article_from_item).transpose()
    }

    async fn put(&self, article: &Article) -> anyhow::Result<()> {
        self.client
            .put_item()
            .table_name(&self.table)
            .item("id", AttributeValue::S(article.id.clone()))
            .item("title", AttributeValue::S(article.title.clone()))
            .item("body", AttributeValue::S(article.body.clone()))
            .item("author", AttributeValue::S(article.author.clone()))
            .item("created_at", AttributeValue::N(article.created_at.to_string()))
            .send()
            .await
            .with_context(|| format!("put_item on {} failed", self.table))?;
        Ok(())
    }

    async fn list(&self) -> anyhow::Result<Vec<Article>> {
        let mut articles = Vec::new();
        let mut start_key: Option<Item> = None;
        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .with_context(|| format!("scan on {} failed", self.table))?;
            for item in output.items() {
                articles.push(article_from_item(item)?);
            }
            match output.last_evaluated_key() {
                Some(key) if !key.is_empty() => start_key = Some(key.clone()),
                _ => break,
            }
        }
        Ok(articles)
    }
}
